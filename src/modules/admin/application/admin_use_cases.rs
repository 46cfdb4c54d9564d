use std::sync::Arc;

use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminCheckUseCase, ProfileStatisticsUseCase, SearchProfilesUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub check: Arc<dyn AdminCheckUseCase + Send + Sync>,
    pub search_profiles: Arc<dyn SearchProfilesUseCase + Send + Sync>,
    pub statistics: Arc<dyn ProfileStatisticsUseCase + Send + Sync>,
}
