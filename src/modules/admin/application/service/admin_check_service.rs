use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::admin::application::domain::entities::AdminCheck;
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminCheckError, AdminCheckUseCase,
};

/// Reads the flag from the identity store rather than trusting the token claim.
pub struct AdminCheckService<U: UserQuery> {
    users: U,
}

impl<U: UserQuery> AdminCheckService<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U: UserQuery> AdminCheckUseCase for AdminCheckService<U> {
    async fn execute(&self, user_id: UserId) -> Result<AdminCheck, AdminCheckError> {
        let user = self
            .users
            .find_by_id(user_id.value())
            .await
            .map_err(|e| AdminCheckError::QueryError(e.to_string()))?
            .ok_or(AdminCheckError::UserNotFound)?;

        Ok(AdminCheck {
            is_admin: user.is_admin,
            username: user.username,
        })
    }
}
