use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_account::FetchAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/accounts/profile/")]
pub async fn fetch_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_account.execute(user.id()).await {
        Ok(account) => ApiResponse::success(account),

        Err(FetchAccountError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchAccountError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to fetch account");
            ApiResponse::internal_error()
        }
    }
}
