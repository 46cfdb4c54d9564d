use serde::Serialize;

use crate::modules::profile::application::domain::entities::ProfileDetail;
use crate::modules::profile::application::domain::listing::ProfileOrdering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Active,
    Inactive,
}

impl ActivityStatus {
    /// Anything other than `active` or `inactive` means no status filter.
    pub fn parse_lenient(raw: Option<&str>) -> Option<Self> {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("active") => Some(Self::Active),
            Some("inactive") => Some(Self::Inactive),
            _ => None,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Console search across every profile, active or not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminProfileFilter {
    /// ILIKE over nama, nim and prodi.
    pub search: Option<String>,
    pub status: Option<ActivityStatus>,
    pub ordering: ProfileOrdering,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminProfileList {
    pub count: usize,
    pub results: Vec<ProfileDetail>,
}

impl From<Vec<ProfileDetail>> for AdminProfileList {
    fn from(results: Vec<ProfileDetail>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminCheck {
    pub is_admin: bool,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileStatistics {
    pub total_mahasiswa: u64,
    pub active_mahasiswa: u64,
    pub inactive_mahasiswa: u64,
    pub total_users: u64,
    pub total_skills: u64,
    pub total_endorsements: u64,
    pub total_profile_views: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_ignores_unknown_values() {
        assert_eq!(
            ActivityStatus::parse_lenient(Some("Active")),
            Some(ActivityStatus::Active)
        );
        assert_eq!(
            ActivityStatus::parse_lenient(Some("inactive")),
            Some(ActivityStatus::Inactive)
        );
        assert_eq!(ActivityStatus::parse_lenient(Some("all")), None);
        assert_eq!(ActivityStatus::parse_lenient(None), None);
    }

    #[test]
    fn list_count_matches_results() {
        let list = AdminProfileList::from(Vec::new());
        assert_eq!(list.count, 0);
        assert!(list.results.is_empty());
    }
}
