use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileCard;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FeaturedProfilesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Homepage shortlists over active profiles.
#[async_trait]
pub trait FeaturedProfilesUseCase: Send + Sync {
    async fn latest(&self) -> Result<Vec<ProfileCard>, FeaturedProfilesError>;

    async fn most_viewed(&self) -> Result<Vec<ProfileCard>, FeaturedProfilesError>;
}
