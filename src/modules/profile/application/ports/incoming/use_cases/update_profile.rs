use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    ProfileDetail, ProfileLists, ProfilePatch, ProfileValidationError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("You can only update your own profile")]
    Forbidden,

    #[error("Invalid profile data")]
    Validation(ProfileValidationError),

    #[error("NIM already used by another student")]
    NimTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        profile_id: i32,
        patch: ProfilePatch,
        lists: ProfileLists,
    ) -> Result<ProfileDetail, UpdateProfileError>;
}
