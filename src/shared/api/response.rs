use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Field name -> messages, rendered under `error.fields`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Groups `(field, message)` pairs, keeping message order per field.
pub fn collect_field_errors<I>(pairs: I) -> FieldErrors
where
    I: IntoIterator<Item = (&'static str, String)>,
{
    let mut fields = FieldErrors::new();
    for (field, message) in pairs {
        fields.entry(field.to_string()).or_default().push(message);
    }
    fields
}

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        Self::error_with_fields(status, code, message, None)
    }

    fn error_with_fields(
        status: StatusCode,
        code: &str,
        message: &str,
        fields: Option<FieldErrors>,
    ) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
                fields,
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    /// 400 VALIDATION_ERROR carrying per-field messages.
    pub fn validation_error(message: &str, fields: FieldErrors) -> HttpResponse {
        Self::error_with_fields(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            message,
            Some(fields),
        )
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }

    /// 500 that surfaces the underlying message (document rendering).
    pub fn internal_error_with(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}
