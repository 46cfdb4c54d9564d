use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/accounts/admin/statistics/")]
pub async fn admin_statistics_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.statistics.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!(error = %e, "Failed to compute statistics");
            ApiResponse::internal_error()
        }
    }
}
