use chrono::{DateTime, NaiveDate, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::SkillView;
use crate::modules::talent::application::domain::entities::TalentRecord;
use crate::shared::patch_field::PatchField;

/// A stored profile row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub id: i32,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub nama: String,
    pub nim: String,
    pub prodi: String,
    pub angkatan: Option<String>,
    pub fakultas: Option<String>,
    pub email: String,
    pub telepon: Option<String>,
    pub alamat: Option<String>,
    pub foto_profil: Option<String>,
    pub bio: Option<String>,
    pub tanggal_lahir: Option<NaiveDate>,
    pub is_active: bool,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub website: Option<String>,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceRecord {
    pub id: i32,
    pub posisi: String,
    pub organisasi: String,
    pub tahun_mulai: String,
    pub tahun_selesai: Option<String>,
    pub deskripsi: Option<String>,
}

/// Full profile with owner username and every nested list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub profile: ProfileRecord,
    pub username: String,
    pub skills: Vec<SkillView>,
    pub pengalaman: Vec<ExperienceRecord>,
    pub talents: Vec<TalentRecord>,
}

/// Lighter shape used by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub id: i32,
    pub nama: String,
    pub nim: String,
    pub prodi: String,
    pub angkatan: Option<String>,
    pub fakultas: Option<String>,
    pub email: String,
    pub foto_profil: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub skills_count: u64,
    pub talents_count: u64,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
}

/// A skill submitted together with a profile, either `"Rust"` or
/// `{"nama": "Rust", "level": "Expert"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillInput {
    pub nama: String,
    pub level: Option<String>,
}

impl<'de> Deserialize<'de> for SkillInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Full {
                nama: String,
                #[serde(default)]
                level: Option<String>,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Name(nama) => SkillInput { nama, level: None },
            Raw::Full { nama, level } => SkillInput { nama, level },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExperienceInput {
    #[serde(default)]
    pub posisi: Option<String>,
    #[serde(default)]
    pub organisasi: Option<String>,
    #[serde(default)]
    pub tahun_mulai: Option<String>,
    #[serde(default)]
    pub tahun_selesai: Option<String>,
    #[serde(default)]
    pub deskripsi: Option<String>,
}

/// An experience entry that survived filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExperience {
    pub posisi: String,
    pub organisasi: String,
    pub tahun_mulai: String,
    pub tahun_selesai: Option<String>,
    pub deskripsi: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims names and drops blank entries.
pub fn clean_skills(items: Vec<SkillInput>) -> Vec<SkillInput> {
    items
        .into_iter()
        .filter_map(|s| {
            let nama = s.nama.trim().to_string();
            (!nama.is_empty()).then(|| SkillInput {
                nama,
                level: trimmed(s.level),
            })
        })
        .collect()
}

/// Drops entries missing `posisi` or `organisasi`.
pub fn clean_experiences(items: Vec<ExperienceInput>) -> Vec<NewExperience> {
    items
        .into_iter()
        .filter_map(|e| {
            let posisi = trimmed(e.posisi)?;
            let organisasi = trimmed(e.organisasi)?;
            Some(NewExperience {
                posisi,
                organisasi,
                tahun_mulai: trimmed(e.tahun_mulai).unwrap_or_default(),
                tahun_selesai: trimmed(e.tahun_selesai),
                deskripsi: trimmed(e.deskripsi),
            })
        })
        .collect()
}

/// Replacement lists for a profile write; `None` keeps what is stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileLists {
    pub skills: Option<Vec<SkillInput>>,
    pub experiences: Option<Vec<NewExperience>>,
}

impl ProfileLists {
    /// Only non-empty lists replace stored ones.
    pub fn from_inputs(
        skills: Option<Vec<SkillInput>>,
        pengalaman: Option<Vec<ExperienceInput>>,
    ) -> Self {
        Self {
            skills: skills.filter(|s| !s.is_empty()).map(clean_skills),
            experiences: pengalaman
                .filter(|e| !e.is_empty())
                .map(clean_experiences),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_none() && self.experiences.is_none()
    }
}

/// Trimmed text for a nullable column; blank becomes NULL.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Editable profile columns with explicit PATCH semantics.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub nama: PatchField<String>,
    pub nim: PatchField<String>,
    pub prodi: PatchField<String>,
    pub angkatan: PatchField<String>,
    pub fakultas: PatchField<String>,
    pub email: PatchField<String>,
    pub telepon: PatchField<String>,
    pub alamat: PatchField<String>,
    pub foto_profil: PatchField<String>,
    pub bio: PatchField<String>,
    pub tanggal_lahir: PatchField<NaiveDate>,
    pub linkedin: PatchField<String>,
    pub github: PatchField<String>,
    pub instagram: PatchField<String>,
    pub website: PatchField<String>,
}

/// Columns required when a profile is first created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub nama: String,
    pub nim: String,
    pub prodi: String,
    pub email: String,
    pub angkatan: Option<String>,
    pub fakultas: Option<String>,
    pub telepon: Option<String>,
    pub alamat: Option<String>,
    pub foto_profil: Option<String>,
    pub bio: Option<String>,
    pub tanggal_lahir: Option<NaiveDate>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileValidationError {
    pub fields: Vec<(&'static str, String)>,
}

impl ProfileValidationError {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            fields: vec![(field, message.into())],
        }
    }
}

const REQUIRED: [&str; 4] = ["nama", "nim", "prodi", "email"];

const LIMITS: [(&str, usize); 7] = [
    ("nama", 100),
    ("nim", 20),
    ("prodi", 100),
    ("angkatan", 10),
    ("fakultas", 100),
    ("email", 255),
    ("telepon", 20),
];

fn text_fields(patch: &ProfilePatch) -> [(&'static str, &PatchField<String>); 14] {
    [
        ("nama", &patch.nama),
        ("nim", &patch.nim),
        ("prodi", &patch.prodi),
        ("angkatan", &patch.angkatan),
        ("fakultas", &patch.fakultas),
        ("email", &patch.email),
        ("telepon", &patch.telepon),
        ("alamat", &patch.alamat),
        ("foto_profil", &patch.foto_profil),
        ("bio", &patch.bio),
        ("linkedin", &patch.linkedin),
        ("github", &patch.github),
        ("instagram", &patch.instagram),
        ("website", &patch.website),
    ]
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        text_fields(self).iter().all(|(_, f)| f.is_unset()) && self.tanggal_lahir.is_unset()
    }

    pub fn nim_value(&self) -> Option<&str> {
        self.nim.as_value().map(|n| n.trim())
    }

    /// Checks the fields being written: required columns may not be cleared,
    /// lengths are bounded, and the email must parse.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        let mut fields = Vec::new();

        for (name, field) in text_fields(self) {
            match field {
                PatchField::Unset => {}
                PatchField::Null if REQUIRED.contains(&name) => {
                    fields.push((name, "This field may not be null.".to_string()));
                }
                PatchField::Null => {}
                PatchField::Value(value) => {
                    let value = value.trim();
                    if REQUIRED.contains(&name) && value.is_empty() {
                        fields.push((name, "This field may not be blank.".to_string()));
                        continue;
                    }
                    if let Some((_, max)) = LIMITS.iter().find(|(n, _)| *n == name) {
                        if value.chars().count() > *max {
                            fields.push((
                                name,
                                format!("Ensure this field has no more than {max} characters."),
                            ));
                        }
                    }
                    if name == "email" && !EmailAddress::is_valid(value) {
                        fields.push((name, "Enter a valid email address.".to_string()));
                    }
                }
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ProfileValidationError { fields })
        }
    }

    /// Builds the create payload, naming each missing required field.
    pub fn into_new_profile(self) -> Result<NewProfile, ProfileValidationError> {
        let missing: Vec<_> = [
            ("nama", &self.nama),
            ("nim", &self.nim),
            ("prodi", &self.prodi),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, f)| f.as_value().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| (name, "This field is required.".to_string()))
        .collect();

        if !missing.is_empty() {
            return Err(ProfileValidationError { fields: missing });
        }

        self.validate()?;

        let value = |f: PatchField<String>| f.as_value().and_then(|v| optional_text(v));

        Ok(NewProfile {
            nama: value(self.nama).unwrap_or_default(),
            nim: value(self.nim).unwrap_or_default(),
            prodi: value(self.prodi).unwrap_or_default(),
            email: value(self.email).unwrap_or_default(),
            angkatan: value(self.angkatan),
            fakultas: value(self.fakultas),
            telepon: value(self.telepon),
            alamat: value(self.alamat),
            foto_profil: value(self.foto_profil),
            bio: value(self.bio),
            tanggal_lahir: self.tanggal_lahir.as_value().copied(),
            linkedin: value(self.linkedin),
            github: value(self.github),
            instagram: value(self.instagram),
            website: value(self.website),
        })
    }
}

/// Who is looking at a profile and from where.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContext {
    pub viewer: Option<Uuid>,
    pub session_key: Option<String>,
    pub ip: Option<String>,
    pub user_agent: String,
    pub referrer: Option<String>,
}

impl ViewContext {
    /// Dedup needs something to key on.
    pub fn is_identifiable(&self) -> bool {
        self.viewer.is_some() || self.session_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewOutcome {
    pub profile_id: i32,
    pub profile_name: String,
    pub total_views: i32,
    pub unique_view: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleOutcome {
    pub is_active: bool,
    pub message: String,
}

impl ToggleOutcome {
    pub fn new(is_active: bool) -> Self {
        let state = if is_active { "activated" } else { "deactivated" };
        Self {
            is_active,
            message: format!("Profile {state} successfully"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skill_input_accepts_names_and_objects() {
        let items: Vec<SkillInput> =
            serde_json::from_value(json!(["Rust", {"nama": "Go", "level": "Basic"}])).unwrap();

        assert_eq!(items[0].nama, "Rust");
        assert_eq!(items[0].level, None);
        assert_eq!(items[1].level.as_deref(), Some("Basic"));
    }

    #[test]
    fn clean_skills_drops_blank_names() {
        let cleaned = clean_skills(vec![
            SkillInput {
                nama: "  ".into(),
                level: None,
            },
            SkillInput {
                nama: " SQL ".into(),
                level: Some(" ".into()),
            },
        ]);

        assert_eq!(
            cleaned,
            vec![SkillInput {
                nama: "SQL".into(),
                level: None
            }]
        );
    }

    #[test]
    fn clean_experiences_requires_role_and_organisation() {
        let cleaned = clean_experiences(vec![
            ExperienceInput {
                posisi: Some("Asisten Lab".into()),
                organisasi: None,
                ..Default::default()
            },
            ExperienceInput {
                posisi: Some("Ketua".into()),
                organisasi: Some("HIMA".into()),
                tahun_mulai: Some("2023".into()),
                ..Default::default()
            },
        ]);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].organisasi, "HIMA");
        assert_eq!(cleaned[0].tahun_selesai, None);
    }

    #[test]
    fn empty_lists_do_not_replace() {
        let lists = ProfileLists::from_inputs(Some(vec![]), Some(vec![]));
        assert!(lists.is_empty());
    }

    #[test]
    fn create_lists_every_missing_required_field() {
        let patch = ProfilePatch {
            nama: PatchField::Value("Budi".into()),
            ..Default::default()
        };
        let err = patch.into_new_profile().unwrap_err();
        let names: Vec<_> = err.fields.iter().map(|(f, _)| *f).collect();
        assert_eq!(names, vec!["nim", "prodi", "email"]);
    }

    #[test]
    fn create_trims_and_keeps_optionals() {
        let patch = ProfilePatch {
            nama: PatchField::Value(" Budi ".into()),
            nim: PatchField::Value("2201001".into()),
            prodi: PatchField::Value("Informatika".into()),
            email: PatchField::Value("budi@kampus.ac.id".into()),
            bio: PatchField::Value("Suka Rust".into()),
            ..Default::default()
        };
        let new = patch.into_new_profile().unwrap();
        assert_eq!(new.nama, "Budi");
        assert_eq!(new.bio.as_deref(), Some("Suka Rust"));
        assert_eq!(new.github, None);
    }

    #[test]
    fn create_stores_blank_optionals_as_null() {
        let patch = ProfilePatch {
            nama: PatchField::Value("Budi".into()),
            nim: PatchField::Value("2201001".into()),
            prodi: PatchField::Value("Informatika".into()),
            email: PatchField::Value("budi@kampus.ac.id".into()),
            bio: PatchField::Value("  x ".into()),
            fakultas: PatchField::Value("".into()),
            ..Default::default()
        };
        let new = patch.into_new_profile().unwrap();
        assert_eq!(new.bio.as_deref(), Some("x"));
        assert_eq!(new.fakultas, None);
    }

    #[test]
    fn patch_rejects_clearing_required_fields_and_bad_email() {
        let patch = ProfilePatch {
            nama: PatchField::Null,
            email: PatchField::Value("not-an-email".into()),
            bio: PatchField::Null,
            ..Default::default()
        };
        let err = patch.validate().unwrap_err();
        let names: Vec<_> = err.fields.iter().map(|(f, _)| *f).collect();
        assert_eq!(names, vec!["nama", "email"]);
    }

    #[test]
    fn patch_enforces_lengths() {
        let patch = ProfilePatch {
            nim: PatchField::Value("1".repeat(21)),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn toggle_message_reflects_state() {
        assert_eq!(ToggleOutcome::new(true).message, "Profile activated successfully");
        assert_eq!(
            ToggleOutcome::new(false).message,
            "Profile deactivated successfully"
        );
    }
}
