use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileCard;
use crate::modules::profile::application::ports::incoming::use_cases::{
    FeaturedProfilesError, FeaturedProfilesUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub const LATEST_LIMIT: u64 = 5;
pub const MOST_VIEWED_LIMIT: u64 = 10;

pub struct FeaturedProfilesService<Q: ProfileQuery> {
    query: Q,
}

impl<Q: ProfileQuery> FeaturedProfilesService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: ProfileQuery> FeaturedProfilesUseCase for FeaturedProfilesService<Q> {
    async fn latest(&self) -> Result<Vec<ProfileCard>, FeaturedProfilesError> {
        self.query
            .latest(LATEST_LIMIT)
            .await
            .map_err(|e| FeaturedProfilesError::QueryError(e.to_string()))
    }

    async fn most_viewed(&self) -> Result<Vec<ProfileCard>, FeaturedProfilesError> {
        self.query
            .most_viewed(MOST_VIEWED_LIMIT)
            .await
            .map_err(|e| FeaturedProfilesError::QueryError(e.to_string()))
    }
}
