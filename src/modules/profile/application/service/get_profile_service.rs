use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileDetail;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct GetProfileService<Q: ProfileQuery> {
    query: Q,
}

impl<Q: ProfileQuery> GetProfileService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: ProfileQuery> GetProfileUseCase for GetProfileService<Q> {
    async fn execute(&self, profile_id: i32) -> Result<ProfileDetail, GetProfileError> {
        self.query
            .find_detail(profile_id)
            .await
            .map_err(|e| GetProfileError::QueryError(e.to_string()))?
            .ok_or(GetProfileError::NotFound)
    }
}
