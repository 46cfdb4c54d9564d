use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::patch_field::PatchField;

pub const SKILL_NAME_MAX_LEN: usize = 100;
pub const SKILL_LEVEL_MAX_LEN: usize = 50;

/// A skill row as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRecord {
    pub id: i32,
    #[serde(rename = "mahasiswa")]
    pub profile_id: i32,
    pub nama: String,
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endorsement {
    pub id: i32,
    #[serde(rename = "skill")]
    pub skill_id: i32,
    pub endorsed_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Endorsement as rendered inside a skill, with the endorser's username.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndorsementView {
    pub id: i32,
    #[serde(rename = "skill")]
    pub skill_id: i32,
    pub endorsed_by: Uuid,
    pub endorsed_by_username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub id: i32,
    #[serde(rename = "mahasiswa")]
    pub profile_id: i32,
    pub nama: String,
    pub level: Option<String>,
    pub endorsement_count: usize,
    pub endorsements: Vec<EndorsementView>,
}

impl SkillView {
    pub fn from_record(record: SkillRecord, endorsements: Vec<EndorsementView>) -> Self {
        Self {
            id: record.id,
            profile_id: record.profile_id,
            nama: record.nama,
            level: record.level,
            endorsement_count: endorsements.len(),
            endorsements,
        }
    }
}

/// Who owns a skill, resolved through its profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillOwner {
    pub skill_id: i32,
    pub profile_id: i32,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSkill {
    pub nama: String,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub nama: PatchField<String>,
    pub level: PatchField<String>,
}

impl SkillPatch {
    pub fn is_empty(&self) -> bool {
        self.nama.is_unset() && self.level.is_unset()
    }
}

/// Field-level problems with a skill payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillValidationError {
    pub fields: Vec<(&'static str, String)>,
}

impl SkillValidationError {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push((field, message.into()));
    }

    fn into_result(self) -> Result<(), Self> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn check_name(name: &str, errors: &mut SkillValidationError) {
    let name = name.trim();
    if name.is_empty() {
        errors.push("nama", "This field may not be blank.");
    } else if name.chars().count() > SKILL_NAME_MAX_LEN {
        errors.push(
            "nama",
            format!("Ensure this field has no more than {SKILL_NAME_MAX_LEN} characters."),
        );
    }
}

fn check_level(level: &str, errors: &mut SkillValidationError) {
    if level.chars().count() > SKILL_LEVEL_MAX_LEN {
        errors.push(
            "level",
            format!("Ensure this field has no more than {SKILL_LEVEL_MAX_LEN} characters."),
        );
    }
}

impl NewSkill {
    pub fn validate(&self) -> Result<(), SkillValidationError> {
        let mut errors = SkillValidationError::default();
        check_name(&self.nama, &mut errors);
        if let Some(level) = &self.level {
            check_level(level, &mut errors);
        }
        errors.into_result()
    }
}

impl SkillPatch {
    pub fn validate(&self) -> Result<(), SkillValidationError> {
        let mut errors = SkillValidationError::default();
        match &self.nama {
            PatchField::Value(nama) => check_name(nama, &mut errors),
            PatchField::Null => errors.push("nama", "This field may not be null."),
            PatchField::Unset => {}
        }
        if let PatchField::Value(level) = &self.level {
            check_level(level, &mut errors);
        }
        errors.into_result()
    }
}
