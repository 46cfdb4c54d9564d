use actix_web::{patch, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::profile::application::ports::incoming::use_cases::ToggleStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Shared with the admin console route.
pub async fn toggle_profile_status(
    admin: &AdminUser,
    profile_id: i32,
    data: &web::Data<AppState>,
) -> HttpResponse {
    match data.profile.toggle_status.execute(profile_id).await {
        Ok(outcome) => {
            info!(admin_id = %admin.user_id, profile_id, is_active = outcome.is_active, "Profile status changed by admin");
            ApiResponse::success(outcome)
        }
        Err(ToggleStatusError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Mahasiswa not found")
        }
        Err(ToggleStatusError::RepositoryError(e)) => {
            error!(profile_id, error = %e, "Failed to toggle profile status");
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/mahasiswa/{id:\\d+}/toggle-status/")]
pub async fn toggle_status_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    toggle_profile_status(&admin, path.into_inner(), &data).await
}
