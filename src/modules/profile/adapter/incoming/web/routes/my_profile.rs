use actix_web::{get, web, Responder};
use serde_json::json;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::ports::incoming::use_cases::{
    MyProfile, MyProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's profile detail, or the account basics when none exists yet.
#[get("/api/mahasiswa/my-profile/")]
pub async fn my_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.my_profile.execute(user.id()).await {
        Ok(MyProfile::Found(detail)) => ApiResponse::success(detail),

        Ok(MyProfile::Missing(account)) => ApiResponse::success(json!({
            "has_profile": false,
            "message": "You have not created a profile yet",
            "user": account,
        })),

        Err(MyProfileError::AccountNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Account no longer exists")
        }

        Err(MyProfileError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load own profile");
            ApiResponse::internal_error()
        }
    }
}
