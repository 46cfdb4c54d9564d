use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{ViewContext, ViewOutcome};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TrackViewError {
    #[error("Profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TrackViewUseCase: Send + Sync {
    async fn execute(
        &self,
        profile_id: i32,
        context: ViewContext,
    ) -> Result<ViewOutcome, TrackViewError>;
}
