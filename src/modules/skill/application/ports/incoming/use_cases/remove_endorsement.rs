use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveEndorsementError {
    #[error("Skill not found")]
    SkillNotFound,

    #[error("Endorsement not found")]
    EndorsementNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveEndorsementUseCase: Send + Sync {
    async fn execute(&self, endorser: UserId, skill_id: i32)
        -> Result<(), RemoveEndorsementError>;
}
