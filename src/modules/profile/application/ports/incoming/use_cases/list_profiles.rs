use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileCard;
use crate::modules::profile::application::domain::listing::ProfileListFilter;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProfilesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListProfilesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProfileListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProfileCard>, ListProfilesError>;
}
