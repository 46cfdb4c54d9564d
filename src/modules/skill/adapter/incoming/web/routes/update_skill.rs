use actix_web::{patch, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::skill::application::domain::entities::SkillPatch;
use crate::modules::skill::application::ports::incoming::use_cases::UpdateSkillError;
use crate::shared::api::{collect_field_errors, ApiResponse};
use crate::shared::patch_field::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchSkillRequest {
    #[serde(default)]
    pub nama: PatchField<String>,

    #[serde(default)]
    pub level: PatchField<String>,
}

/// Full replacement: `nama` required, a missing `level` clears it.
#[derive(Debug, Deserialize)]
pub struct PutSkillRequest {
    pub nama: Option<String>,
    pub level: Option<String>,
}

async fn apply(
    user: AuthenticatedUser,
    skill_id: i32,
    patch: SkillPatch,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.skill.update.execute(user.id(), skill_id, patch).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(UpdateSkillError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only modify your own skills")
        }

        Err(UpdateSkillError::Validation(e)) => {
            ApiResponse::validation_error("Invalid skill data", collect_field_errors(e.fields))
        }

        Err(UpdateSkillError::RepositoryError(e)) => {
            error!(skill_id, error = %e, "Failed to update skill");
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/skills/{id:\\d+}/")]
pub async fn patch_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<PatchSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let patch = SkillPatch {
        nama: req.nama,
        level: req.level,
    };

    apply(user, path.into_inner(), patch, data).await
}

#[put("/api/skills/{id:\\d+}/")]
pub async fn put_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<PutSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let Some(nama) = req.nama else {
        return ApiResponse::validation_error(
            "Invalid skill data",
            collect_field_errors([("nama", "This field is required.".to_string())]),
        );
    };

    let patch = SkillPatch {
        nama: PatchField::Value(nama),
        level: match req.level.filter(|l| !l.trim().is_empty()) {
            Some(level) => PatchField::Value(level),
            None => PatchField::Null,
        },
    };

    apply(user, path.into_inner(), patch, data).await
}
