use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/mahasiswa/{id:\\d+}/")]
pub async fn get_profile_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let profile_id = path.into_inner();

    match data.profile.get.execute(profile_id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Mahasiswa not found")
        }
        Err(GetProfileError::QueryError(e)) => {
            error!(profile_id, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
