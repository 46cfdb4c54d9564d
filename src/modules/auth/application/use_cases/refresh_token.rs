use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};

// ========================= Refresh Token Request =========================

#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshTokenRequestError {
    EmptyToken,
}

impl std::fmt::Display for RefreshTokenRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenRequestError::EmptyToken => write!(f, "Refresh token is required"),
        }
    }
}

impl std::error::Error for RefreshTokenRequestError {}

impl RefreshTokenRequest {
    pub fn new(refresh_token: Option<String>) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self { refresh_token })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

// ====================== Refresh Token Error =============================

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshTokenError {
    TokenExpired,
    TokenInvalid,
    InvalidTokenType,
    TokenGenerationFailed(String),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenError::TokenExpired => write!(f, "Refresh token has expired"),
            RefreshTokenError::TokenInvalid => write!(f, "Invalid refresh token"),
            RefreshTokenError::InvalidTokenType => write!(f, "Token is not a refresh token"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for RefreshTokenError {}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            TokenError::TokenNotYetValid
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
        }
    }
}

// ============================ Refresh Token Response =========================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RefreshTokenResponse {
    pub access: String,
}

// ============================ Refresh Token Use Case =============================

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

#[derive(Clone)]
pub struct RefreshTokenUseCase {
    token_provider: Arc<dyn TokenProvider>,
}

impl RefreshTokenUseCase {
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let access = self
            .token_provider
            .refresh_access_token(request.refresh_token())?;

        Ok(RefreshTokenResponse { access })
    }
}
