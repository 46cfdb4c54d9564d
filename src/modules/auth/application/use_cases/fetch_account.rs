use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub is_student: bool,
    pub has_profile: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchAccountError {
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait FetchAccountUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<AccountInfo, FetchAccountError>;
}

#[derive(Clone)]
pub struct FetchAccountService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchAccountService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchAccountUseCase for FetchAccountService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, user_id: UserId) -> Result<AccountInfo, FetchAccountError> {
        let user = self
            .query
            .find_by_id(user_id.value())
            .await
            .map_err(|e| FetchAccountError::QueryError(e.to_string()))?
            .ok_or(FetchAccountError::NotFound)?;

        let has_profile = self
            .query
            .has_profile(user.id)
            .await
            .map_err(|e| FetchAccountError::QueryError(e.to_string()))?;

        Ok(AccountInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            is_admin: user.is_admin,
            is_student: user.is_student,
            has_profile,
        })
    }
}
