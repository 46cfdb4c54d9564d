use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteProfileUseCase, FeaturedProfilesUseCase, GetProfileUseCase, ListProfilesUseCase,
    MyProfileUseCase, ProfileCompletionUseCase, RecommendProfilesUseCase, ToggleStatusUseCase,
    TrackViewUseCase, UpdateProfileUseCase, UpsertProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub upsert: Arc<dyn UpsertProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProfileUseCase + Send + Sync>,
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub list: Arc<dyn ListProfilesUseCase + Send + Sync>,
    pub featured: Arc<dyn FeaturedProfilesUseCase + Send + Sync>,
    pub my_profile: Arc<dyn MyProfileUseCase + Send + Sync>,
    pub completion: Arc<dyn ProfileCompletionUseCase + Send + Sync>,
    pub track_view: Arc<dyn TrackViewUseCase + Send + Sync>,
    pub recommend: Arc<dyn RecommendProfilesUseCase + Send + Sync>,
    pub toggle_status: Arc<dyn ToggleStatusUseCase + Send + Sync>,
}
