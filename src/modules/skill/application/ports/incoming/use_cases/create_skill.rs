use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::skill::application::domain::entities::{
    NewSkill, SkillValidationError, SkillView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    /// The caller has no profile to attach the skill to.
    #[error("Profile required")]
    ProfileRequired,

    #[error("Invalid skill data")]
    Validation(SkillValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, skill: NewSkill)
        -> Result<SkillView, CreateSkillError>;
}
