use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendProfilesError {
    #[error("Profile not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait RecommendProfilesUseCase: Send + Sync {
    async fn execute(&self, profile_id: i32) -> Result<Vec<ProfileDetail>, RecommendProfilesError>;
}
