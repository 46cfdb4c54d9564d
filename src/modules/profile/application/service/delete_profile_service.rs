use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteProfileError, DeleteProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileRepository, ProfileRepositoryError,
};

pub struct DeleteProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteProfileUseCase for DeleteProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    async fn execute(&self, caller: UserId, profile_id: i32) -> Result<(), DeleteProfileError> {
        let profile = self
            .query
            .find_by_id(profile_id)
            .await
            .map_err(|e| DeleteProfileError::RepositoryError(e.to_string()))?
            .ok_or(DeleteProfileError::NotFound)?;

        if profile.user_id != caller.value() {
            return Err(DeleteProfileError::Forbidden);
        }

        self.repository
            .delete(profile_id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => DeleteProfileError::NotFound,
                other => DeleteProfileError::RepositoryError(other.to_string()),
            })?;

        info!(profile_id, "Profile deleted");
        Ok(())
    }
}
