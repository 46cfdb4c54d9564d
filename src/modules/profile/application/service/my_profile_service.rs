use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::profile::application::ports::incoming::use_cases::{
    AccountSummary, MyProfile, MyProfileError, MyProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

/// Resolves the caller's own profile, falling back to account basics.
pub struct MyProfileService<Q, U>
where
    Q: ProfileQuery,
    U: UserQuery,
{
    profiles: Q,
    users: U,
}

impl<Q, U> MyProfileService<Q, U>
where
    Q: ProfileQuery,
    U: UserQuery,
{
    pub fn new(profiles: Q, users: U) -> Self {
        Self { profiles, users }
    }
}

#[async_trait]
impl<Q, U> MyProfileUseCase for MyProfileService<Q, U>
where
    Q: ProfileQuery,
    U: UserQuery,
{
    async fn execute(&self, caller: UserId) -> Result<MyProfile, MyProfileError> {
        let profile = self
            .profiles
            .find_by_user(caller.value())
            .await
            .map_err(|e| MyProfileError::QueryError(e.to_string()))?;

        if let Some(profile) = profile {
            let detail = self
                .profiles
                .find_detail(profile.id)
                .await
                .map_err(|e| MyProfileError::QueryError(e.to_string()))?;
            if let Some(detail) = detail {
                return Ok(MyProfile::Found(detail));
            }
        }

        let account = self
            .users
            .find_by_id(caller.value())
            .await
            .map_err(|e| MyProfileError::QueryError(e.to_string()))?
            .ok_or(MyProfileError::AccountNotFound)?;

        Ok(MyProfile::Missing(AccountSummary {
            id: account.id,
            username: account.username,
            email: account.email,
        }))
    }
}
