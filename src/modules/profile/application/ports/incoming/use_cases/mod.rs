mod delete_profile;
mod featured_profiles;
mod get_profile;
mod list_profiles;
mod my_profile;
mod profile_completion;
mod recommend_profiles;
mod toggle_status;
mod track_view;
mod update_profile;
mod upsert_profile;

pub use delete_profile::{DeleteProfileError, DeleteProfileUseCase};
pub use featured_profiles::{FeaturedProfilesError, FeaturedProfilesUseCase};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use list_profiles::{ListProfilesError, ListProfilesUseCase};
pub use my_profile::{AccountSummary, MyProfile, MyProfileError, MyProfileUseCase};
pub use profile_completion::{CompletionReport, ProfileCompletionError, ProfileCompletionUseCase};
pub use recommend_profiles::{RecommendProfilesError, RecommendProfilesUseCase};
pub use toggle_status::{ToggleStatusError, ToggleStatusUseCase};
pub use track_view::{TrackViewError, TrackViewUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
pub use upsert_profile::{UpsertOutcome, UpsertProfileError, UpsertProfileUseCase};
