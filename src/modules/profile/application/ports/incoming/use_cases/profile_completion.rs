use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::completion::Completion;
use crate::modules::profile::application::domain::entities::ProfileDetail;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionReport {
    #[serde(flatten)]
    pub completion: Completion,
    pub mahasiswa: ProfileDetail,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileCompletionError {
    #[error("No mahasiswa profile found for this user")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ProfileCompletionUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<CompletionReport, ProfileCompletionError>;
}
