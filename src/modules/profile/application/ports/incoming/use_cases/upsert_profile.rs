use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    ProfileDetail, ProfileLists, ProfilePatch, ProfileValidationError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Created(ProfileDetail),
    Updated(ProfileDetail),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertProfileError {
    #[error("Invalid profile data")]
    Validation(ProfileValidationError),

    #[error("NIM already used by another student")]
    NimTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Creates the caller's profile on first use, partially updates it after.
#[async_trait]
pub trait UpsertProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        patch: ProfilePatch,
        lists: ProfileLists,
    ) -> Result<UpsertOutcome, UpsertProfileError>;
}
