mod admin_check_service;
mod profile_statistics_service;
mod search_profiles_service;

pub use admin_check_service::AdminCheckService;
pub use profile_statistics_service::ProfileStatisticsService;
pub use search_profiles_service::SearchProfilesService;

#[cfg(test)]
pub(crate) mod mocks {
    use async_trait::async_trait;
    use mockall::mock;

    use crate::modules::admin::application::domain::entities::{
        AdminProfileFilter, ProfileStatistics,
    };
    use crate::modules::admin::application::ports::outgoing::{AdminQuery, AdminQueryError};
    use crate::modules::profile::application::domain::entities::ProfileDetail;

    mock! {
        pub Admin {}

        #[async_trait]
        impl AdminQuery for Admin {
            async fn search_profiles(&self, filter: &AdminProfileFilter) -> Result<Vec<ProfileDetail>, AdminQueryError>;
            async fn statistics(&self) -> Result<ProfileStatistics, AdminQueryError>;
        }
    }
}
