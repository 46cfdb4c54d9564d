use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenProvider, ACCESS_TOKEN,
};
use crate::shared::api::ApiResponse;

/// Caller identified by a valid bearer access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl AuthenticatedUser {
    pub fn id(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
}

fn has_authorization_header(req: &HttpRequest) -> bool {
    req.headers().contains_key("Authorization")
}

fn verify_access_token(req: &HttpRequest, token: &str) -> Result<TokenClaims, ActixError> {
    let jwt_service = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("Token provider is not registered as app data");
            create_api_error(ApiResponse::internal_error())
        })?;

    let claims = jwt_service.verify_token(token).map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != ACCESS_TOKEN {
        return Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    Ok(claims)
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    let claims = verify_access_token(req, &token)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        is_admin: claims.is_admin,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Caller that may be anonymous.
///
/// No `Authorization` header yields `OptionalUser(None)`. A header carrying an
/// invalid or expired token is still rejected with 401.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl OptionalUser {
    pub fn user_id(&self) -> Option<Uuid> {
        self.0.as_ref().map(|u| u.user_id)
    }
}

impl FromRequest for OptionalUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if !has_authorization_header(req) {
            return ready(Ok(OptionalUser(None)));
        }

        ready(authenticate(req).map(|user| OptionalUser(Some(user))))
    }
}

/// Authenticated caller carrying the admin claim.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = match authenticate(req) {
            Ok(user) => user,
            Err(e) => return ready(Err(e)),
        };

        if !user.is_admin {
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "ADMIN_REQUIRED",
                "Administrator access required",
            ))));
        }

        ready(Ok(AdminUser {
            user_id: user.user_id,
        }))
    }
}
