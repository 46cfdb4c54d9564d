use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::skill::application::domain::entities::{
    SkillPatch, SkillValidationError, SkillView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Only the owner may modify this skill")]
    Forbidden,

    #[error("Invalid skill data")]
    Validation(SkillValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        skill_id: i32,
        patch: SkillPatch,
    ) -> Result<SkillView, UpdateSkillError>;
}
