use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::admin::application::domain::entities::AdminCheck;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminCheckError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait AdminCheckUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<AdminCheck, AdminCheckError>;
}
