use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::ports::incoming::use_cases::ProfileCompletionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/mahasiswa/profile-completion/")]
pub async fn profile_completion_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.completion.execute(user.id()).await {
        Ok(report) => ApiResponse::success(report),
        Err(ProfileCompletionError::NotFound) => ApiResponse::not_found(
            "PROFILE_NOT_FOUND",
            "No mahasiswa profile found for this user",
        ),
        Err(ProfileCompletionError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to compute profile completion");
            ApiResponse::internal_error()
        }
    }
}
