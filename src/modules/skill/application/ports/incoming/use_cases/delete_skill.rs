use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Only the owner may delete this skill")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, skill_id: i32) -> Result<(), DeleteSkillError>;
}
