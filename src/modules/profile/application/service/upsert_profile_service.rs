use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    ProfileDetail, ProfileLists, ProfilePatch, ProfileRecord,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpsertOutcome, UpsertProfileError, UpsertProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileRepository, ProfileRepositoryError,
};

pub struct UpsertProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpsertProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn existing(&self, caller: UserId) -> Result<Option<ProfileRecord>, UpsertProfileError> {
        self.query
            .find_by_user(caller.value())
            .await
            .map_err(|e| UpsertProfileError::RepositoryError(e.to_string()))
    }

    async fn detail(&self, profile_id: i32) -> Result<ProfileDetail, UpsertProfileError> {
        self.query
            .find_detail(profile_id)
            .await
            .map_err(|e| UpsertProfileError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                UpsertProfileError::RepositoryError(format!(
                    "profile {profile_id} missing after write"
                ))
            })
    }

    async fn update(
        &self,
        profile_id: i32,
        patch: ProfilePatch,
        lists: ProfileLists,
    ) -> Result<UpsertOutcome, UpsertProfileError> {
        self.repository
            .update(profile_id, patch, lists)
            .await
            .map_err(map_repository_error)?;

        info!(profile_id, "Profile updated");
        Ok(UpsertOutcome::Updated(self.detail(profile_id).await?))
    }
}

fn map_repository_error(e: ProfileRepositoryError) -> UpsertProfileError {
    match e {
        ProfileRepositoryError::NimTaken => UpsertProfileError::NimTaken,
        other => UpsertProfileError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<Q, R> UpsertProfileUseCase for UpsertProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    async fn execute(
        &self,
        caller: UserId,
        patch: ProfilePatch,
        lists: ProfileLists,
    ) -> Result<UpsertOutcome, UpsertProfileError> {
        patch.validate().map_err(UpsertProfileError::Validation)?;

        let existing = self.existing(caller).await?;

        if let Some(nim) = patch.nim_value() {
            let unchanged = existing.as_ref().is_some_and(|p| p.nim == nim);
            if !unchanged
                && self
                    .query
                    .nim_taken_by_other(nim, caller.value())
                    .await
                    .map_err(|e| UpsertProfileError::RepositoryError(e.to_string()))?
            {
                return Err(UpsertProfileError::NimTaken);
            }
        }

        if let Some(profile) = existing {
            return self.update(profile.id, patch, lists).await;
        }

        let new_profile = patch
            .clone()
            .into_new_profile()
            .map_err(UpsertProfileError::Validation)?;

        match self
            .repository
            .create(caller.value(), new_profile, lists.clone())
            .await
        {
            Ok(record) => {
                info!(profile_id = record.id, user_id = %caller, "Profile created");
                Ok(UpsertOutcome::Created(self.detail(record.id).await?))
            }
            // A concurrent request created the profile first.
            Err(ProfileRepositoryError::AlreadyExists) => {
                let profile = self.existing(caller).await?.ok_or_else(|| {
                    UpsertProfileError::RepositoryError("profile vanished during upsert".into())
                })?;
                self.update(profile.id, patch, lists).await
            }
            Err(e) => Err(map_repository_error(e)),
        }
    }
}
