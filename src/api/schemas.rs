use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every successful response
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope of every error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    #[schema(example = "Invalid registration data")]
    pub message: String,

    /// Per-field messages, present on validation failures only
    #[schema(example = json!({"nim": ["NIM sudah terdaftar"]}))]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}
