use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/mahasiswa/latest/")]
pub async fn latest_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.featured.latest().await {
        Ok(cards) => ApiResponse::success(cards),
        Err(e) => {
            error!(error = %e, "Failed to load latest profiles");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/mahasiswa/most-viewed/")]
pub async fn most_viewed_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.featured.most_viewed().await {
        Ok(cards) => ApiResponse::success(cards),
        Err(e) => {
            error!(error = %e, "Failed to load most viewed profiles");
            ApiResponse::internal_error()
        }
    }
}
