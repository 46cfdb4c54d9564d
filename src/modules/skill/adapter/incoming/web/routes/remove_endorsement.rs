use actix_web::{delete, web, Responder};
use serde_json::json;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::skill::application::ports::incoming::use_cases::RemoveEndorsementError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/skills/{id:\\d+}/remove-endorsement/")]
pub async fn remove_endorsement_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.remove_endorsement.execute(user.id(), skill_id).await {
        Ok(()) => ApiResponse::success(json!({ "message": "Endorsement removed" })),

        Err(RemoveEndorsementError::SkillNotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(RemoveEndorsementError::EndorsementNotFound) => {
            ApiResponse::not_found("ENDORSEMENT_NOT_FOUND", "Endorsement not found")
        }

        Err(RemoveEndorsementError::RepositoryError(e)) => {
            error!(skill_id, error = %e, "Failed to remove endorsement");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use actix_web::{test, App};
    use serde_json::Value;
    use uuid::Uuid;

    #[actix_web::test]
    async fn missing_endorsement_is_404() {
        // default stub reports EndorsementNotFound
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(remove_endorsement_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/skills/4/remove-endorsement/")
            .insert_header(bearer(Uuid::new_v4(), false))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ENDORSEMENT_NOT_FOUND");
    }
}
