use async_trait::async_trait;

use crate::modules::talent::application::domain::entities::TalentRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTalentError {
    #[error("Talent not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetTalentUseCase: Send + Sync {
    async fn execute(&self, talent_id: i32) -> Result<TalentRecord, GetTalentError>;
}
