use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::skill::application::ports::incoming::use_cases::GetSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/skills/{id:\\d+}/")]
pub async fn get_skill_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.get.execute(skill_id).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(GetSkillError::NotFound) => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        Err(GetSkillError::QueryError(e)) => {
            error!(skill_id, error = %e, "Failed to fetch skill");
            ApiResponse::internal_error()
        }
    }
}
