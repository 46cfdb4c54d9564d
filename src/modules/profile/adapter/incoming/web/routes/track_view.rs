use std::net::IpAddr;

use actix_web::{post, web, HttpRequest, Responder};
use serde_json::json;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::OptionalUser;
use crate::modules::profile::application::domain::entities::ViewContext;
use crate::modules::profile::application::ports::incoming::use_cases::TrackViewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const SESSION_HEADER: &str = "X-Session-Key";

/// Width of `profile_views.session_key`.
const MAX_SESSION_KEY_LEN: usize = 255;

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First hop of `X-Forwarded-For` when it parses as an address, else the socket peer.
fn client_ip(req: &HttpRequest) -> Option<String> {
    header(req, "X-Forwarded-For")
        .and_then(|v| v.split(',').next().and_then(|hop| hop.trim().parse::<IpAddr>().ok()))
        .or_else(|| req.peer_addr().map(|addr| addr.ip()))
        .map(|ip| ip.to_string())
}

/// Oversized keys are dropped rather than truncated.
fn session_key(req: &HttpRequest) -> Option<String> {
    header(req, SESSION_HEADER).filter(|key| key.chars().count() <= MAX_SESSION_KEY_LEN)
}

pub fn view_context(req: &HttpRequest, viewer: &OptionalUser) -> ViewContext {
    ViewContext {
        viewer: viewer.user_id(),
        session_key: session_key(req),
        ip: client_ip(req),
        user_agent: header(req, "User-Agent").unwrap_or_default(),
        referrer: header(req, "Referer"),
    }
}

#[post("/api/mahasiswa/{id:\\d+}/view/")]
pub async fn track_view_handler(
    viewer: OptionalUser,
    req: HttpRequest,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();
    let context = view_context(&req, &viewer);

    match data.profile.track_view.execute(profile_id, context).await {
        Ok(outcome) => ApiResponse::success(json!({
            "message": "View tracked successfully",
            "profile_id": outcome.profile_id,
            "profile_name": outcome.profile_name,
            "total_views": outcome.total_views,
            "unique_view": outcome.unique_view,
        })),
        Err(TrackViewError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Mahasiswa not found")
        }
        Err(TrackViewError::RepositoryError(e)) => {
            error!(profile_id, error = %e, "Failed to track profile view");
            ApiResponse::internal_error()
        }
    }
}
