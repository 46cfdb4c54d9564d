pub mod delete_profile;
pub mod featured_profiles;
pub mod get_profile;
pub mod list_profiles;
pub mod my_profile;
pub mod profile_completion;
mod profile_payload;
pub mod recommendations;
pub mod toggle_status;
pub mod track_view;
pub mod update_profile;
pub mod upsert_profile;

pub use delete_profile::delete_profile_handler;
pub use featured_profiles::{latest_profiles_handler, most_viewed_profiles_handler};
pub use get_profile::get_profile_handler;
pub use list_profiles::list_profiles_handler;
pub use my_profile::my_profile_handler;
pub use profile_completion::profile_completion_handler;
pub use recommendations::recommendations_handler;
pub use toggle_status::{toggle_profile_status, toggle_status_handler};
pub use track_view::track_view_handler;
pub use update_profile::{patch_profile_handler, put_profile_handler};
pub use upsert_profile::upsert_profile_handler;
