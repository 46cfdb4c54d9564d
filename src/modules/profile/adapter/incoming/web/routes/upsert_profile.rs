use actix_web::{post, web, Responder};
use serde_json::Value;
use tracing::error;

use super::profile_payload::ProfilePayload;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpsertOutcome, UpsertProfileError,
};
use crate::shared::api::payload::strip_blank_fields;
use crate::shared::api::{collect_field_errors, ApiResponse};
use crate::AppState;

/// Creates the caller's profile or updates the existing one.
///
/// Blank strings and nulls are dropped before decoding, so this endpoint can
/// set fields but never clear them.
#[post("/api/mahasiswa/")]
pub async fn upsert_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = match ProfilePayload::decode(strip_blank_fields(body.into_inner())) {
        Ok(payload) => payload,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };
    let (patch, lists) = payload.into_parts();

    match data.profile.upsert.execute(user.id(), patch, lists).await {
        Ok(UpsertOutcome::Created(detail)) => ApiResponse::created(detail),
        Ok(UpsertOutcome::Updated(detail)) => ApiResponse::success(detail),

        Err(UpsertProfileError::Validation(e)) => {
            ApiResponse::validation_error("Invalid profile data", collect_field_errors(e.fields))
        }

        Err(UpsertProfileError::NimTaken) => ApiResponse::bad_request(
            "NIM_ALREADY_EXISTS",
            "NIM is already registered by another student",
        ),

        Err(UpsertProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to save profile");
            ApiResponse::internal_error()
        }
    }
}
