use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::skill::application::domain::entities::Endorsement;

#[derive(Debug, Clone, PartialEq)]
pub enum EndorseOutcome {
    Created(Endorsement),
    AlreadyEndorsed(Endorsement),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EndorseSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Cannot endorse your own skill")]
    OwnSkill,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EndorseSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        endorser: UserId,
        skill_id: i32,
    ) -> Result<EndorseOutcome, EndorseSkillError>;
}
