use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: i32) -> Result<SkillView, GetSkillError>;
}
