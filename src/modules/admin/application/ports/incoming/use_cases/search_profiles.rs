use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::{AdminProfileFilter, AdminProfileList};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchProfilesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait SearchProfilesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: AdminProfileFilter,
    ) -> Result<AdminProfileList, SearchProfilesError>;
}
