use async_trait::async_trait;

use crate::modules::talent::application::domain::entities::TalentRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTalentsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListTalentsUseCase: Send + Sync {
    async fn execute(&self, profile_id: Option<i32>)
        -> Result<Vec<TalentRecord>, ListTalentsError>;
}
