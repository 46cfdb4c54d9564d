use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::ports::incoming::use_cases::DeleteProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/mahasiswa/{id:\\d+}/")]
pub async fn delete_profile_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    match data.profile.delete.execute(user.id(), profile_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Mahasiswa not found")
        }
        Err(DeleteProfileError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only delete your own profile")
        }
        Err(DeleteProfileError::RepositoryError(e)) => {
            error!(profile_id, error = %e, "Failed to delete profile");
            ApiResponse::internal_error()
        }
    }
}
