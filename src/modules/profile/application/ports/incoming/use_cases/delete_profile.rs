use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("You can only delete your own profile")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProfileUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, profile_id: i32) -> Result<(), DeleteProfileError>;
}
