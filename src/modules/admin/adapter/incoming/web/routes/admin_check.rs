use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::admin::application::ports::incoming::use_cases::AdminCheckError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/accounts/admin/check/")]
pub async fn admin_check_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.check.execute(admin.user_id.into()).await {
        Ok(check) => ApiResponse::success(check),
        Err(AdminCheckError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(AdminCheckError::QueryError(e)) => {
            error!(admin_id = %admin.user_id, error = %e, "Admin check failed");
            ApiResponse::internal_error()
        }
    }
}
