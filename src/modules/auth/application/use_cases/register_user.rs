use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

use super::AuthTokens;
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\w.@+-]{1,150}$").expect("valid username pattern"))
}

// ========================= Register Request =========================

/// Registration input, validated field by field.
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    username: String,
    email: String,
    password: String,
}

/// Every failing field with its message, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterRequestError {
    pub fields: Vec<(&'static str, String)>,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self
            .fields
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterUserRequest {
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, RegisterRequestError> {
        let mut fields = Vec::new();

        let username = username.map(|u| u.trim().to_string()).unwrap_or_default();
        if username.is_empty() {
            fields.push(("username", "This field is required.".to_string()));
        } else if !username_pattern().is_match(&username) {
            fields.push((
                "username",
                "Use at most 150 letters, digits and @/./+/-/_ characters.".to_string(),
            ));
        }

        let email = email.map(|e| e.trim().to_lowercase()).unwrap_or_default();
        if email.is_empty() {
            fields.push(("email", "This field is required.".to_string()));
        } else if !EmailAddress::is_valid(&email) {
            fields.push(("email", "Enter a valid email address.".to_string()));
        }

        let password = password.unwrap_or_default();
        if password.is_empty() {
            fields.push(("password", "This field is required.".to_string()));
        } else if password.chars().count() < MIN_PASSWORD_LENGTH {
            fields.push((
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters."),
            ));
        }

        if !fields.is_empty() {
            return Err(RegisterRequestError { fields });
        }

        Ok(Self {
            username,
            email,
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Register Error =============================

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterUserError {
    UsernameTaken,
    EmailTaken,
    HashingFailed(String),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterUserError::UsernameTaken => write!(f, "Username already exists"),
            RegisterUserError::EmailTaken => write!(f, "Email already exists"),
            RegisterUserError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterUserError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RegisterUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterUserError {}

// ============================ Register Response =================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterUserResponse {
    pub user: RegisteredUser,
    pub tokens: AuthTokens,
}

// ============================ Register User Use Case =============================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        let taken = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if taken.is_some() {
            return Err(RegisterUserError::UsernameTaken);
        }

        let taken = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if taken.is_some() {
            return Err(RegisterUserError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = User::new_student(
            request.username().to_string(),
            request.email().to_string(),
            password_hash,
        );

        let created = self.repository.create_user(user).await.map_err(|e| match e {
            // Lost a race with a concurrent registration
            UserRepositoryError::UserAlreadyExists => RegisterUserError::UsernameTaken,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })?;

        let access = self
            .token_provider
            .generate_access_token(created.id, created.is_admin)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;
        let refresh = self
            .token_provider
            .generate_refresh_token(created.id, created.is_admin)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!(user_id = %created.id, username = %created.username, "User registered");

        Ok(RegisterUserResponse {
            user: RegisteredUser {
                id: created.id,
                username: created.username,
                email: created.email,
            },
            tokens: AuthTokens { access, refresh },
        })
    }
}
