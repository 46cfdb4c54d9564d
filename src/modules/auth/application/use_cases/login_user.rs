use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::AuthTokens;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

// ========================= Login Request =========================

#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginRequestError {
    MissingCredentials,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::MissingCredentials => {
                write!(f, "Username and password are required")
            }
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, LoginRequestError> {
        let username = username.map(|u| u.trim().to_string()).unwrap_or_default();
        let password = password.unwrap_or_default();

        if username.is_empty() || password.is_empty() {
            return Err(LoginRequestError::MissingCredentials);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, PartialEq)]
pub enum LoginError {
    InvalidCredentials,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid credentials"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ============================ Login Response =================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoggedInUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_student: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginUserResponse {
    pub user: LoggedInUser,
    pub tokens: AuthTokens,
}

// ============================ Login User Use Case =============================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access = self
            .token_provider
            .generate_access_token(user.id, user.is_admin)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;
        let refresh = self
            .token_provider
            .generate_refresh_token(user.id, user.is_admin)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            user: LoggedInUser {
                id: user.id,
                username: user.username,
                email: user.email,
                is_student: user.is_student,
                is_admin: user.is_admin,
            },
            tokens: AuthTokens { access, refresh },
        })
    }
}
