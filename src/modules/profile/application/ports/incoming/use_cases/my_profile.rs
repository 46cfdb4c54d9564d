use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileDetail;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MyProfile {
    Found(ProfileDetail),
    Missing(AccountSummary),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MyProfileError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait MyProfileUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<MyProfile, MyProfileError>;
}
