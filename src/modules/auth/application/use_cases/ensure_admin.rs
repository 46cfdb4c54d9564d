use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{PasswordHasher, UserQuery, UserRepository};

/// Credentials for the bootstrap administrator (ADMIN_* variables).
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminSeedOutcome {
    Created,
    Promoted,
    AlreadyAdmin,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnsureAdminError {
    #[error("Email {0} already belongs to another user")]
    EmailConflict(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EnsureAdminUseCase: Send + Sync {
    async fn execute(&self, seed: AdminSeed) -> Result<AdminSeedOutcome, EnsureAdminError>;
}

pub struct EnsureAdminService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> EnsureAdminService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> EnsureAdminUseCase for EnsureAdminService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, seed: AdminSeed) -> Result<AdminSeedOutcome, EnsureAdminError> {
        let existing = self
            .query
            .find_by_username(&seed.username)
            .await
            .map_err(|e| EnsureAdminError::RepositoryError(e.to_string()))?;

        // An existing account keeps its password; only the role is raised
        if let Some(user) = existing {
            if user.is_admin {
                return Ok(AdminSeedOutcome::AlreadyAdmin);
            }
            self.repository
                .grant_admin(user.id)
                .await
                .map_err(|e| EnsureAdminError::RepositoryError(e.to_string()))?;
            return Ok(AdminSeedOutcome::Promoted);
        }

        let email = seed.email.trim().to_lowercase();
        let email_owner = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| EnsureAdminError::RepositoryError(e.to_string()))?;
        if email_owner.is_some() {
            return Err(EnsureAdminError::EmailConflict(email));
        }

        let password_hash = self
            .password_hasher
            .hash_password(&seed.password)
            .await
            .map_err(|e| EnsureAdminError::HashingFailed(e.to_string()))?;

        self.repository
            .create_user(User::new_admin(seed.username, email, password_hash))
            .await
            .map_err(|e| EnsureAdminError::RepositoryError(e.to_string()))?;

        Ok(AdminSeedOutcome::Created)
    }
}
