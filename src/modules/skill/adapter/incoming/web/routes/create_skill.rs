use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::skill::application::domain::entities::NewSkill;
use crate::modules::skill::application::ports::incoming::use_cases::CreateSkillError;
use crate::shared::api::{collect_field_errors, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub nama: Option<String>,
    pub level: Option<String>,
}

#[post("/api/skills/")]
pub async fn create_skill_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let Some(nama) = req.nama else {
        return ApiResponse::validation_error(
            "Invalid skill data",
            collect_field_errors([("nama", "This field is required.".to_string())]),
        );
    };

    let skill = NewSkill {
        nama,
        level: req.level.filter(|l| !l.trim().is_empty()),
    };

    match data.skill.create.execute(user.id(), skill).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateSkillError::ProfileRequired) => ApiResponse::bad_request(
            "PROFILE_REQUIRED",
            "Create a mahasiswa profile before adding skills",
        ),

        Err(CreateSkillError::Validation(e)) => {
            ApiResponse::validation_error("Invalid skill data", collect_field_errors(e.fields))
        }

        Err(CreateSkillError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create skill");
            ApiResponse::internal_error()
        }
    }
}
