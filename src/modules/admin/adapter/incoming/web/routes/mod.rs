pub mod admin_check;
pub mod admin_profiles;
pub mod admin_statistics;
pub mod admin_toggle;

pub use admin_check::admin_check_handler;
pub use admin_profiles::admin_profiles_handler;
pub use admin_statistics::admin_statistics_handler;
pub use admin_toggle::admin_toggle_handler;
