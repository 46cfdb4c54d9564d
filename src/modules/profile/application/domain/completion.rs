use serde::Serialize;

use super::entities::ProfileRecord;

pub const COMPLETION_FIELDS: [&str; 7] = [
    "nama",
    "nim",
    "prodi",
    "email",
    "bio",
    "foto_profil",
    "tanggal_lahir",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    pub is_complete: bool,
    pub completion_percentage: u8,
    pub filled_fields: usize,
    pub total_fields: usize,
    pub missing_fields: Vec<&'static str>,
}

fn filled(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

impl Completion {
    pub fn of(profile: &ProfileRecord) -> Self {
        let present = [
            filled(Some(&profile.nama)),
            filled(Some(&profile.nim)),
            filled(Some(&profile.prodi)),
            filled(Some(&profile.email)),
            filled(profile.bio.as_deref()),
            filled(profile.foto_profil.as_deref()),
            profile.tanggal_lahir.is_some(),
        ];

        let missing_fields: Vec<&'static str> = COMPLETION_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| *name)
            .collect();

        let total_fields = COMPLETION_FIELDS.len();
        let filled_fields = total_fields - missing_fields.len();

        Self {
            is_complete: missing_fields.is_empty(),
            completion_percentage: (filled_fields * 100 / total_fields) as u8,
            filled_fields,
            total_fields,
            missing_fields,
        }
    }
}
