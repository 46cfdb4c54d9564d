use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSkillsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self, profile_id: Option<i32>) -> Result<Vec<SkillView>, ListSkillsError>;
}
