use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileCard;
use crate::modules::profile::application::domain::listing::ProfileListFilter;
use crate::modules::profile::application::ports::incoming::use_cases::{
    ListProfilesError, ListProfilesUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListProfilesService<Q: ProfileQuery> {
    query: Q,
}

impl<Q: ProfileQuery> ListProfilesService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: ProfileQuery> ListProfilesUseCase for ListProfilesService<Q> {
    async fn execute(
        &self,
        filter: ProfileListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProfileCard>, ListProfilesError> {
        self.query
            .list(&filter, page)
            .await
            .map_err(|e| ListProfilesError::QueryError(e.to_string()))
    }
}
