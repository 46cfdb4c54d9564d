use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    ProfileDetail, ProfileLists, ProfilePatch,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileRepository, ProfileRepositoryError,
};

pub struct UpdateProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateProfileUseCase for UpdateProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    async fn execute(
        &self,
        caller: UserId,
        profile_id: i32,
        patch: ProfilePatch,
        lists: ProfileLists,
    ) -> Result<ProfileDetail, UpdateProfileError> {
        let current = self
            .query
            .find_by_id(profile_id)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::NotFound)?;

        if current.user_id != caller.value() {
            return Err(UpdateProfileError::Forbidden);
        }

        patch.validate().map_err(UpdateProfileError::Validation)?;

        if let Some(nim) = patch.nim_value() {
            if nim != current.nim
                && self
                    .query
                    .nim_taken_by_other(nim, caller.value())
                    .await
                    .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            {
                return Err(UpdateProfileError::NimTaken);
            }
        }

        if !patch.is_empty() || !lists.is_empty() {
            self.repository
                .update(profile_id, patch, lists)
                .await
                .map_err(|e| match e {
                    ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
                    ProfileRepositoryError::NimTaken => UpdateProfileError::NimTaken,
                    other => UpdateProfileError::RepositoryError(other.to_string()),
                })?;
            info!(profile_id, "Profile updated");
        }

        self.query
            .find_detail(profile_id)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::NotFound)
    }
}
