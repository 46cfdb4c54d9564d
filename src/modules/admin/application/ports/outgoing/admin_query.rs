use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::{AdminProfileFilter, ProfileStatistics};
use crate::modules::profile::application::domain::entities::ProfileDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminQuery: Send + Sync {
    /// Unpaginated; includes inactive profiles.
    async fn search_profiles(
        &self,
        filter: &AdminProfileFilter,
    ) -> Result<Vec<ProfileDetail>, AdminQueryError>;

    async fn statistics(&self) -> Result<ProfileStatistics, AdminQueryError>;
}
