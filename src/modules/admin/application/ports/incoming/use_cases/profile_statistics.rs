use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::ProfileStatistics;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileStatisticsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ProfileStatisticsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileStatistics, ProfileStatisticsError>;
}
