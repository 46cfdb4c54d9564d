use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTalentError {
    #[error("Talent not found")]
    NotFound,

    #[error("Only the owner may delete this talent")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTalentUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, talent_id: i32) -> Result<(), DeleteTalentError>;
}
