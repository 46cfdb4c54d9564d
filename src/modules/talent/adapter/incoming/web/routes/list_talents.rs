use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTalentsQuery {
    pub mahasiswa: Option<i32>,
}

#[get("/api/talents/")]
pub async fn list_talents_handler(
    query: web::Query<ListTalentsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.talent.list.execute(query.mahasiswa).await {
        Ok(talents) => ApiResponse::success(talents),
        Err(e) => {
            error!(error = %e, "Failed to list talents");
            ApiResponse::internal_error()
        }
    }
}
