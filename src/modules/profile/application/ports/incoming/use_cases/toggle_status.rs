use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ToggleOutcome;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleStatusError {
    #[error("Profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ToggleStatusUseCase: Send + Sync {
    async fn execute(&self, profile_id: i32) -> Result<ToggleOutcome, ToggleStatusError>;
}
