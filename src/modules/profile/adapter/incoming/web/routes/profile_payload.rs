use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::modules::profile::application::domain::entities::{
    ExperienceInput, ProfileLists, ProfilePatch, SkillInput,
};
use crate::shared::api::payload::EmbeddedList;
use crate::shared::patch_field::PatchField;

/// Writable profile fields plus the embedded lists.
///
/// Columns such as `is_active` and `views_count` are not listed and are
/// ignored when clients send them.
#[derive(Debug, Default, Deserialize)]
pub struct ProfilePayload {
    #[serde(default)]
    pub nama: PatchField<String>,
    #[serde(default)]
    pub nim: PatchField<String>,
    #[serde(default)]
    pub prodi: PatchField<String>,
    #[serde(default)]
    pub angkatan: PatchField<String>,
    #[serde(default)]
    pub fakultas: PatchField<String>,
    #[serde(default)]
    pub email: PatchField<String>,
    #[serde(default)]
    pub telepon: PatchField<String>,
    #[serde(default)]
    pub alamat: PatchField<String>,
    #[serde(default)]
    pub foto_profil: PatchField<String>,
    #[serde(default)]
    pub bio: PatchField<String>,
    #[serde(default)]
    pub tanggal_lahir: PatchField<NaiveDate>,
    #[serde(default)]
    pub linkedin: PatchField<String>,
    #[serde(default)]
    pub github: PatchField<String>,
    #[serde(default)]
    pub instagram: PatchField<String>,
    #[serde(default)]
    pub website: PatchField<String>,
    #[serde(default)]
    pub skills: Option<EmbeddedList<SkillInput>>,
    #[serde(default)]
    pub pengalaman: Option<EmbeddedList<ExperienceInput>>,
}

impl ProfilePayload {
    pub fn decode(raw: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(raw)
    }

    pub fn into_parts(self) -> (ProfilePatch, ProfileLists) {
        let lists = ProfileLists::from_inputs(
            self.skills.map(EmbeddedList::into_inner),
            self.pengalaman.map(EmbeddedList::into_inner),
        );

        let patch = ProfilePatch {
            nama: self.nama,
            nim: self.nim,
            prodi: self.prodi,
            angkatan: self.angkatan,
            fakultas: self.fakultas,
            email: self.email,
            telepon: self.telepon,
            alamat: self.alamat,
            foto_profil: self.foto_profil,
            bio: self.bio,
            tanggal_lahir: self.tanggal_lahir,
            linkedin: self.linkedin,
            github: self.github,
            instagram: self.instagram,
            website: self.website,
        };

        (patch, lists)
    }
}
