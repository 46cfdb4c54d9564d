use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListSkillsQuery {
    /// Restrict to one profile id.
    pub mahasiswa: Option<i32>,
}

#[get("/api/skills/")]
pub async fn list_skills_handler(
    query: web::Query<ListSkillsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.list.execute(query.mahasiswa).await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => {
            error!(error = %e, "Failed to list skills");
            ApiResponse::internal_error()
        }
    }
}
