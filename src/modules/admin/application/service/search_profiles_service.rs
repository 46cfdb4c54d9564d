use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::{AdminProfileFilter, AdminProfileList};
use crate::modules::admin::application::ports::incoming::use_cases::{
    SearchProfilesError, SearchProfilesUseCase,
};
use crate::modules::admin::application::ports::outgoing::AdminQuery;

pub struct SearchProfilesService<Q: AdminQuery> {
    query: Q,
}

impl<Q: AdminQuery> SearchProfilesService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: AdminQuery> SearchProfilesUseCase for SearchProfilesService<Q> {
    async fn execute(
        &self,
        mut filter: AdminProfileFilter,
    ) -> Result<AdminProfileList, SearchProfilesError> {
        filter.search = filter
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.query
            .search_profiles(&filter)
            .await
            .map(AdminProfileList::from)
            .map_err(|e| SearchProfilesError::QueryError(e.to_string()))
    }
}
