pub mod experiences;
pub mod profile_views;
pub mod profiles;
