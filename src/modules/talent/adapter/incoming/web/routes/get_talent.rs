use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::talent::application::ports::incoming::use_cases::GetTalentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/talents/{id:\\d+}/")]
pub async fn get_talent_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let talent_id = path.into_inner();

    match data.talent.get.execute(talent_id).await {
        Ok(talent) => ApiResponse::success(talent),
        Err(GetTalentError::NotFound) => {
            ApiResponse::not_found("TALENT_NOT_FOUND", "Talent not found")
        }
        Err(GetTalentError::QueryError(e)) => {
            error!(talent_id, error = %e, "Failed to fetch talent");
            ApiResponse::internal_error()
        }
    }
}
