use crate::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};

#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequestDto {
    pub refresh: Option<String>,
}

#[post("/api/accounts/token/refresh/")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.refresh.execute(request).await {
        Ok(response) => ApiResponse::success(response),

        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }

        Err(RefreshTokenError::TokenInvalid) => {
            warn!("Rejected invalid refresh token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::InvalidTokenType) => {
            ApiResponse::bad_request("INVALID_TOKEN_TYPE", "Token is not a refresh token")
        }

        Err(RefreshTokenError::TokenGenerationFailed(e)) => {
            error!(error = %e, "Failed to issue access token");
            ApiResponse::internal_error()
        }
    }
}
