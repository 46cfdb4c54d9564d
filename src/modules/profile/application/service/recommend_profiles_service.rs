use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileDetail;
use crate::modules::profile::application::domain::recommendation::{
    rank_candidates, RECOMMENDATION_LIMIT,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    RecommendProfilesError, RecommendProfilesUseCase,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

pub struct RecommendProfilesService<Q: ProfileQuery> {
    query: Q,
}

impl<Q: ProfileQuery> RecommendProfilesService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: ProfileQuery> RecommendProfilesUseCase for RecommendProfilesService<Q> {
    async fn execute(&self, profile_id: i32) -> Result<Vec<ProfileDetail>, RecommendProfilesError> {
        let map_err = |e: ProfileQueryError| RecommendProfilesError::QueryError(e.to_string());

        self.query
            .find_by_id(profile_id)
            .await
            .map_err(map_err)?
            .ok_or(RecommendProfilesError::NotFound)?;

        let skills = self.query.skill_names(profile_id).await.map_err(map_err)?;
        let candidates = self
            .query
            .recommendation_candidates(profile_id, &skills, RECOMMENDATION_LIMIT as u64)
            .await
            .map_err(map_err)?;

        let ranked = rank_candidates(profile_id, &skills, candidates);
        self.query.find_details(&ranked).await.map_err(map_err)
    }
}
