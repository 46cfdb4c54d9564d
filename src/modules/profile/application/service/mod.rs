mod delete_profile_service;
mod featured_profiles_service;
mod get_profile_service;
mod list_profiles_service;
mod my_profile_service;
mod profile_completion_service;
mod recommend_profiles_service;
mod toggle_status_service;
mod track_view_service;
mod update_profile_service;
mod upsert_profile_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use delete_profile_service::DeleteProfileService;
pub use featured_profiles_service::FeaturedProfilesService;
pub use get_profile_service::GetProfileService;
pub use list_profiles_service::ListProfilesService;
pub use my_profile_service::MyProfileService;
pub use profile_completion_service::ProfileCompletionService;
pub use recommend_profiles_service::RecommendProfilesService;
pub use toggle_status_service::ToggleStatusService;
pub use track_view_service::TrackViewService;
pub use update_profile_service::UpdateProfileService;
pub use upsert_profile_service::UpsertProfileService;
