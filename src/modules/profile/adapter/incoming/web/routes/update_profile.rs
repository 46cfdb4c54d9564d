use actix_web::{patch, put, web, HttpResponse, Responder};
use serde_json::Value;
use tracing::error;

use super::profile_payload::ProfilePayload;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::ports::incoming::use_cases::UpdateProfileError;
use crate::shared::api::{collect_field_errors, ApiResponse};
use crate::AppState;

async fn apply(
    user: AuthenticatedUser,
    profile_id: i32,
    body: Value,
    data: web::Data<AppState>,
) -> HttpResponse {
    let payload = match ProfilePayload::decode(body) {
        Ok(payload) => payload,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };
    let (patch, lists) = payload.into_parts();

    match data
        .profile
        .update
        .execute(user.id(), profile_id, patch, lists)
        .await
    {
        Ok(detail) => ApiResponse::success(detail),

        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Mahasiswa not found")
        }

        Err(UpdateProfileError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only update your own profile")
        }

        Err(UpdateProfileError::Validation(e)) => {
            ApiResponse::validation_error("Invalid profile data", collect_field_errors(e.fields))
        }

        Err(UpdateProfileError::NimTaken) => ApiResponse::bad_request(
            "NIM_ALREADY_EXISTS",
            "NIM is already registered by another student",
        ),

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(profile_id, error = %e, "Failed to update profile");
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/mahasiswa/{id:\\d+}/")]
pub async fn patch_profile_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    apply(user, path.into_inner(), body.into_inner(), data).await
}

/// Same field semantics as PATCH: absent keeps, null clears.
#[put("/api/mahasiswa/{id:\\d+}/")]
pub async fn put_profile_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    apply(user, path.into_inner(), body.into_inner(), data).await
}
