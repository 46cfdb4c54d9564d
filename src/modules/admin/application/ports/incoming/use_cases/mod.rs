mod admin_check;
mod profile_statistics;
mod search_profiles;

pub use admin_check::{AdminCheckError, AdminCheckUseCase};
pub use profile_statistics::{ProfileStatisticsError, ProfileStatisticsUseCase};
pub use search_profiles::{SearchProfilesError, SearchProfilesUseCase};
