use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::talent::application::domain::entities::{
    NewTalent, TalentRecord, TalentValidationError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTalentError {
    #[error("A student profile is required")]
    ProfileRequired,

    #[error("Invalid talent data")]
    Validation(TalentValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTalentUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        talent: NewTalent,
    ) -> Result<TalentRecord, CreateTalentError>;
}
