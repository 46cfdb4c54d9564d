use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::skill::application::ports::incoming::use_cases::DeleteSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/skills/{id:\\d+}/")]
pub async fn delete_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.delete.execute(user.id(), skill_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(DeleteSkillError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only delete your own skills")
        }

        Err(DeleteSkillError::RepositoryError(e)) => {
            error!(skill_id, error = %e, "Failed to delete skill");
            ApiResponse::internal_error()
        }
    }
}
