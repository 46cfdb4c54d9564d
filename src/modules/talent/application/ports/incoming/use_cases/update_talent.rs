use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::talent::application::domain::entities::{
    TalentPatch, TalentRecord, TalentValidationError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTalentError {
    #[error("Talent not found")]
    NotFound,

    #[error("Only the owner may modify this talent")]
    Forbidden,

    #[error("Invalid talent data")]
    Validation(TalentValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTalentUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        talent_id: i32,
        patch: TalentPatch,
    ) -> Result<TalentRecord, UpdateTalentError>;
}
