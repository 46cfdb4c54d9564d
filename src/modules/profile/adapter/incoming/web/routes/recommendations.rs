use actix_web::{get, web, Responder};
use serde_json::json;
use tracing::error;

use crate::modules::profile::application::ports::incoming::use_cases::RecommendProfilesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/mahasiswa/{id:\\d+}/recommendations/")]
pub async fn recommendations_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    match data.profile.recommend.execute(profile_id).await {
        Ok(results) => ApiResponse::success(json!({
            "count": results.len(),
            "results": results,
        })),
        Err(RecommendProfilesError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Mahasiswa not found")
        }
        Err(RecommendProfilesError::QueryError(e)) => {
            error!(profile_id, error = %e, "Failed to build recommendations");
            ApiResponse::internal_error()
        }
    }
}
