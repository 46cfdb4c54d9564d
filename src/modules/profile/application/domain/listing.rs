use std::str::FromStr;

/// Whitelisted `ordering` values for profile listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileOrdering {
    NamaAsc,
    NamaDesc,
    NimAsc,
    NimDesc,
    CreatedAtAsc,
    #[default]
    CreatedAtDesc,
    ViewsAsc,
    ViewsDesc,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported ordering: {0}")]
pub struct UnknownOrdering(pub String);

impl FromStr for ProfileOrdering {
    type Err = UnknownOrdering;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "nama" => Self::NamaAsc,
            "-nama" => Self::NamaDesc,
            "nim" => Self::NimAsc,
            "-nim" => Self::NimDesc,
            "created_at" => Self::CreatedAtAsc,
            "-created_at" => Self::CreatedAtDesc,
            "views_count" => Self::ViewsAsc,
            "-views_count" => Self::ViewsDesc,
            other => return Err(UnknownOrdering(other.to_string())),
        })
    }
}

impl ProfileOrdering {
    /// Absent or blank input falls back to newest first.
    pub fn parse_optional(raw: Option<&str>) -> Result<Self, UnknownOrdering> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }
}

/// Public listing: only active profiles are ever returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileListFilter {
    pub prodi: Option<String>,
    pub fakultas: Option<String>,
    pub angkatan: Option<String>,
    /// Applied on top of the active-only base set.
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub ordering: ProfileOrdering,
}
