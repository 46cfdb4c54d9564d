use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::patch_field::PatchField;

pub const JUDUL_MAX_LEN: usize = 200;
pub const KATEGORI_MAX_LEN: usize = 100;

/// A portfolio item; every stored column is exposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalentRecord {
    pub id: i32,
    #[serde(rename = "mahasiswa")]
    pub profile_id: i32,
    pub judul: String,
    pub deskripsi: String,
    pub kategori: Option<String>,
    pub link_portfolio: Option<String>,
    pub gambar: Option<String>,
    pub tanggal_mulai: Option<NaiveDate>,
    pub tanggal_selesai: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TalentOwner {
    pub talent_id: i32,
    pub profile_id: i32,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewTalent {
    pub judul: String,
    pub deskripsi: String,
    pub kategori: Option<String>,
    pub link_portfolio: Option<String>,
    pub gambar: Option<String>,
    pub tanggal_mulai: Option<NaiveDate>,
    pub tanggal_selesai: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct TalentPatch {
    pub judul: PatchField<String>,
    pub deskripsi: PatchField<String>,
    pub kategori: PatchField<String>,
    pub link_portfolio: PatchField<String>,
    pub gambar: PatchField<String>,
    pub tanggal_mulai: PatchField<NaiveDate>,
    pub tanggal_selesai: PatchField<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TalentValidationError {
    pub fields: Vec<(&'static str, String)>,
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace))
}

fn merge<T: Clone>(patch: &PatchField<T>, current: &Option<T>) -> Option<T> {
    match patch {
        PatchField::Unset => current.clone(),
        PatchField::Null => None,
        PatchField::Value(v) => Some(v.clone()),
    }
}

impl NewTalent {
    pub fn validate(&self) -> Result<(), TalentValidationError> {
        let mut fields = Vec::new();

        let judul = self.judul.trim();
        if judul.is_empty() {
            fields.push(("judul", "This field may not be blank.".to_string()));
        } else if judul.chars().count() > JUDUL_MAX_LEN {
            fields.push((
                "judul",
                format!("Ensure this field has no more than {JUDUL_MAX_LEN} characters."),
            ));
        }

        if self.deskripsi.trim().is_empty() {
            fields.push(("deskripsi", "This field may not be blank.".to_string()));
        }

        if let Some(kategori) = &self.kategori {
            if kategori.chars().count() > KATEGORI_MAX_LEN {
                fields.push((
                    "kategori",
                    format!("Ensure this field has no more than {KATEGORI_MAX_LEN} characters."),
                ));
            }
        }

        if let Some(link) = &self.link_portfolio {
            if !is_http_url(link) {
                fields.push(("link_portfolio", "Enter a valid URL.".to_string()));
            }
        }

        if let (Some(mulai), Some(selesai)) = (self.tanggal_mulai, self.tanggal_selesai) {
            if selesai < mulai {
                fields.push((
                    "tanggal_selesai",
                    "End date must not precede the start date.".to_string(),
                ));
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(TalentValidationError { fields })
        }
    }
}

impl TalentPatch {
    pub fn is_empty(&self) -> bool {
        self.judul.is_unset()
            && self.deskripsi.is_unset()
            && self.kategori.is_unset()
            && self.link_portfolio.is_unset()
            && self.gambar.is_unset()
            && self.tanggal_mulai.is_unset()
            && self.tanggal_selesai.is_unset()
    }

    /// The item as it would look after applying this patch.
    ///
    /// Required text fields set to `null` become empty and fail validation.
    pub fn merged_with(&self, current: &TalentRecord) -> NewTalent {
        let required = |patch: &PatchField<String>, current: &str| match patch {
            PatchField::Unset => current.to_string(),
            PatchField::Null => String::new(),
            PatchField::Value(v) => v.clone(),
        };

        NewTalent {
            judul: required(&self.judul, &current.judul),
            deskripsi: required(&self.deskripsi, &current.deskripsi),
            kategori: merge(&self.kategori, &current.kategori),
            link_portfolio: merge(&self.link_portfolio, &current.link_portfolio),
            gambar: merge(&self.gambar, &current.gambar),
            tanggal_mulai: merge(&self.tanggal_mulai, &current.tanggal_mulai),
            tanggal_selesai: merge(&self.tanggal_selesai, &current.tanggal_selesai),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn talent() -> NewTalent {
        NewTalent {
            judul: "Sistem Informasi Perpustakaan".into(),
            deskripsi: "Aplikasi web".into(),
            ..Default::default()
        }
    }

    fn record() -> TalentRecord {
        TalentRecord {
            id: 1,
            profile_id: 2,
            judul: "Old".into(),
            deskripsi: "Desc".into(),
            kategori: Some("Project".into()),
            link_portfolio: None,
            gambar: None,
            tanggal_mulai: Some(date(2024, 1, 1)),
            tanggal_selesai: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn requires_title_and_description() {
        let err = NewTalent::default().validate().unwrap_err();
        let names: Vec<_> = err.fields.iter().map(|(f, _)| *f).collect();
        assert_eq!(names, vec!["judul", "deskripsi"]);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let t = NewTalent {
            tanggal_mulai: Some(date(2024, 5, 1)),
            tanggal_selesai: Some(date(2024, 4, 30)),
            ..talent()
        };
        assert_eq!(t.validate().unwrap_err().fields[0].0, "tanggal_selesai");
    }

    #[test]
    fn same_day_range_is_fine() {
        let t = NewTalent {
            tanggal_mulai: Some(date(2024, 5, 1)),
            tanggal_selesai: Some(date(2024, 5, 1)),
            ..talent()
        };
        assert!(t.validate().is_ok());
    }

    #[test]
    fn link_must_be_http() {
        let t = NewTalent {
            link_portfolio: Some("ftp://x".into()),
            ..talent()
        };
        assert!(t.validate().is_err());

        let t = NewTalent {
            link_portfolio: Some("https://github.com/budi/perpus".into()),
            ..talent()
        };
        assert!(t.validate().is_ok());
    }

    #[test]
    fn merge_checks_dates_against_stored_values() {
        let patch = TalentPatch {
            tanggal_selesai: PatchField::Value(date(2023, 12, 31)),
            ..Default::default()
        };
        let merged = patch.merged_with(&record());

        assert_eq!(merged.judul, "Old");
        assert!(merged.validate().is_err());
    }

    #[test]
    fn merge_null_clears_optional_fields() {
        let patch = TalentPatch {
            kategori: PatchField::Null,
            ..Default::default()
        };
        assert_eq!(patch.merged_with(&record()).kategori, None);
    }
}
