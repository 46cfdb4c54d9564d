use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::skill::application::domain::entities::Endorsement;
use crate::modules::skill::application::ports::incoming::use_cases::{
    EndorseOutcome, EndorseSkillError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct EndorseResponse {
    message: &'static str,
    already_endorsed: bool,
    endorsement: Endorsement,
}

#[post("/api/skills/{id:\\d+}/endorse/")]
pub async fn endorse_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.endorse.execute(user.id(), skill_id).await {
        Ok(EndorseOutcome::Created(endorsement)) => ApiResponse::created(EndorseResponse {
            message: "Skill endorsed successfully",
            already_endorsed: false,
            endorsement,
        }),

        Ok(EndorseOutcome::AlreadyEndorsed(endorsement)) => {
            ApiResponse::success(EndorseResponse {
                message: "Already endorsed",
                already_endorsed: true,
                endorsement,
            })
        }

        Err(e) => endorse_error(skill_id, e),
    }
}

fn endorse_error(skill_id: i32, e: EndorseSkillError) -> HttpResponse {
    match e {
        EndorseSkillError::NotFound => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        EndorseSkillError::OwnSkill => ApiResponse::bad_request(
            "CANNOT_ENDORSE_OWN_SKILL",
            "You cannot endorse your own skills",
        ),
        EndorseSkillError::RepositoryError(msg) => {
            error!(skill_id, error = %msg, "Failed to endorse skill");
            ApiResponse::internal_error()
        }
    }
}
