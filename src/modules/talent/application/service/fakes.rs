use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::talent::application::domain::entities::{
    NewTalent, TalentOwner, TalentPatch, TalentRecord,
};
use crate::modules::talent::application::ports::outgoing::{
    TalentQuery, TalentQueryError, TalentRepository, TalentRepositoryError,
};
use crate::shared::patch_field::PatchField;

#[derive(Default)]
struct State {
    profiles: HashMap<i32, Uuid>,
    talents: Vec<TalentRecord>,
    next_id: i32,
}

/// In-memory talent store; clones share state.
#[derive(Clone, Default)]
pub struct InMemoryTalents {
    state: Arc<Mutex<State>>,
}

impl InMemoryTalents {
    pub fn with_profile(self, profile_id: i32, user_id: Uuid) -> Self {
        self.state.lock().unwrap().profiles.insert(profile_id, user_id);
        self
    }

    /// Later calls get later `created_at` stamps.
    pub fn with_talent(self, id: i32, profile_id: i32, judul: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let stamp = Utc::now() + Duration::seconds(state.talents.len() as i64);
            state.talents.push(TalentRecord {
                id,
                profile_id,
                judul: judul.to_string(),
                deskripsi: format!("{judul} description"),
                kategori: None,
                link_portfolio: None,
                gambar: None,
                tanggal_mulai: None,
                tanggal_selesai: None,
                created_at: stamp,
                updated_at: stamp,
            });
            state.next_id = state.next_id.max(id);
        }
        self
    }

    pub fn talent(&self, id: i32) -> Option<TalentRecord> {
        self.state
            .lock()
            .unwrap()
            .talents
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }
}

fn apply<T>(target: &mut Option<T>, patch: PatchField<T>) {
    if let Some(value) = patch.into_nullable() {
        *target = value;
    }
}

#[async_trait]
impl TalentQuery for InMemoryTalents {
    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<TalentRecord>, TalentQueryError> {
        let state = self.state.lock().unwrap();
        let mut talents: Vec<_> = state
            .talents
            .iter()
            .filter(|t| profile_id.map_or(true, |p| t.profile_id == p))
            .cloned()
            .collect();
        talents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(talents)
    }

    async fn find_by_id(&self, talent_id: i32) -> Result<Option<TalentRecord>, TalentQueryError> {
        Ok(self.talent(talent_id))
    }

    async fn find_owner(&self, talent_id: i32) -> Result<Option<TalentOwner>, TalentQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .talents
            .iter()
            .find(|t| t.id == talent_id)
            .and_then(|t| {
                state.profiles.get(&t.profile_id).map(|user_id| TalentOwner {
                    talent_id: t.id,
                    profile_id: t.profile_id,
                    user_id: *user_id,
                })
            }))
    }

    async fn find_profile_id_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<i32>, TalentQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .profiles
            .iter()
            .find(|(_, owner)| **owner == user_id)
            .map(|(id, _)| *id))
    }
}

#[async_trait]
impl TalentRepository for InMemoryTalents {
    async fn create_talent(
        &self,
        profile_id: i32,
        talent: NewTalent,
    ) -> Result<TalentRecord, TalentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let now = Utc::now();
        let record = TalentRecord {
            id: state.next_id,
            profile_id,
            judul: talent.judul,
            deskripsi: talent.deskripsi,
            kategori: talent.kategori,
            link_portfolio: talent.link_portfolio,
            gambar: talent.gambar,
            tanggal_mulai: talent.tanggal_mulai,
            tanggal_selesai: talent.tanggal_selesai,
            created_at: now,
            updated_at: now,
        };
        state.talents.push(record.clone());
        Ok(record)
    }

    async fn patch_talent(
        &self,
        talent_id: i32,
        patch: TalentPatch,
    ) -> Result<TalentRecord, TalentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let record = state
            .talents
            .iter_mut()
            .find(|t| t.id == talent_id)
            .ok_or(TalentRepositoryError::NotFound)?;
        if let PatchField::Value(judul) = patch.judul {
            record.judul = judul;
        }
        if let PatchField::Value(deskripsi) = patch.deskripsi {
            record.deskripsi = deskripsi;
        }
        apply(&mut record.kategori, patch.kategori);
        apply(&mut record.link_portfolio, patch.link_portfolio);
        apply(&mut record.gambar, patch.gambar);
        apply(&mut record.tanggal_mulai, patch.tanggal_mulai);
        apply(&mut record.tanggal_selesai, patch.tanggal_selesai);
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete_talent(&self, talent_id: i32) -> Result<(), TalentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.talents.len();
        state.talents.retain(|t| t.id != talent_id);
        if state.talents.len() == before {
            return Err(TalentRepositoryError::NotFound);
        }
        Ok(())
    }
}
