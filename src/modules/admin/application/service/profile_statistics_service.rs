use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::ProfileStatistics;
use crate::modules::admin::application::ports::incoming::use_cases::{
    ProfileStatisticsError, ProfileStatisticsUseCase,
};
use crate::modules::admin::application::ports::outgoing::AdminQuery;

pub struct ProfileStatisticsService<Q: AdminQuery> {
    query: Q,
}

impl<Q: AdminQuery> ProfileStatisticsService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: AdminQuery> ProfileStatisticsUseCase for ProfileStatisticsService<Q> {
    async fn execute(&self) -> Result<ProfileStatistics, ProfileStatisticsError> {
        self.query
            .statistics()
            .await
            .map_err(|e| ProfileStatisticsError::QueryError(e.to_string()))
    }
}
