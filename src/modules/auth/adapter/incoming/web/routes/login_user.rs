use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::register_user::TokenPairDto;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "budi.santoso")]
    pub username: Option<String>,

    #[schema(example = "rahasia123")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    user: LoginUserInfo,
    tokens: TokenPairDto,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    username: String,
    email: String,
    is_student: bool,
    is_admin: bool,
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/accounts/login/",
    tag = "accounts",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/accounts/login/")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(username = %request.username(), "Login attempt");

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");

            ApiResponse::success(LoginResponse {
                user: LoginUserInfo {
                    id: response.user.id.to_string(),
                    username: response.user.username,
                    email: response.user.email,
                    is_student: response.user.is_student,
                    is_admin: response.user.is_admin,
                },
                tokens: TokenPairDto {
                    access: response.tokens.access,
                    refresh: response.tokens.refresh,
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
