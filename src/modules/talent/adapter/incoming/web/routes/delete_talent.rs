use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::talent::application::ports::incoming::use_cases::DeleteTalentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/talents/{id:\\d+}/")]
pub async fn delete_talent_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let talent_id = path.into_inner();

    match data.talent.delete.execute(user.id(), talent_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteTalentError::NotFound) => {
            ApiResponse::not_found("TALENT_NOT_FOUND", "Talent not found")
        }
        Err(DeleteTalentError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only delete your own talents")
        }
        Err(DeleteTalentError::RepositoryError(e)) => {
            error!(talent_id, error = %e, "Failed to delete talent");
            ApiResponse::internal_error()
        }
    }
}
