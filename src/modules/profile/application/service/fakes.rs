use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    ExperienceRecord, NewExperience, NewProfile, ProfileCard, ProfileDetail, ProfileLists,
    ProfilePatch, ProfileRecord, SkillInput, ViewContext,
};
use crate::modules::profile::application::domain::listing::ProfileListFilter;
use crate::modules::profile::application::domain::recommendation::Candidate;
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError,
};
use crate::modules::skill::application::domain::entities::{SkillRecord, SkillView};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch_field::PatchField;

#[derive(Default)]
struct State {
    profiles: Vec<ProfileRecord>,
    skills: HashMap<i32, Vec<SkillInput>>,
    experiences: HashMap<i32, Vec<NewExperience>>,
    usernames: HashMap<Uuid, String>,
    views: Vec<(i32, Option<Uuid>, Option<String>)>,
    next_id: i32,
}

/// In-memory profile store; clones share state.
#[derive(Clone, Default)]
pub struct InMemoryProfiles {
    state: Arc<Mutex<State>>,
}

pub fn profile_record(id: i32, user_id: Uuid, nim: &str) -> ProfileRecord {
    let stamp = Utc::now() + Duration::seconds(id as i64);
    ProfileRecord {
        id,
        user_id,
        nama: format!("Mahasiswa {id}"),
        nim: nim.to_string(),
        prodi: "Informatika".to_string(),
        angkatan: Some("2022".to_string()),
        fakultas: None,
        email: format!("m{id}@kampus.ac.id"),
        telepon: None,
        alamat: None,
        foto_profil: None,
        bio: None,
        tanggal_lahir: None,
        is_active: true,
        linkedin: None,
        github: None,
        instagram: None,
        website: None,
        views_count: 0,
        created_at: stamp,
        updated_at: stamp,
    }
}

impl InMemoryProfiles {
    pub fn with_profile(self, record: ProfileRecord) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id = state.next_id.max(record.id);
            state
                .usernames
                .entry(record.user_id)
                .or_insert_with(|| format!("user{}", record.id));
            state.profiles.push(record);
        }
        self
    }

    pub fn with_skills(self, profile_id: i32, names: &[&str]) -> Self {
        self.state.lock().unwrap().skills.insert(
            profile_id,
            names
                .iter()
                .map(|n| SkillInput {
                    nama: n.to_string(),
                    level: None,
                })
                .collect(),
        );
        self
    }

    pub fn profile(&self, profile_id: i32) -> Option<ProfileRecord> {
        self.state
            .lock()
            .unwrap()
            .profiles
            .iter()
            .find(|p| p.id == profile_id)
            .cloned()
    }

    pub fn profile_count(&self) -> usize {
        self.state.lock().unwrap().profiles.len()
    }

    pub fn skill_names_of(&self, profile_id: i32) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .skills
            .get(&profile_id)
            .map(|s| s.iter().map(|s| s.nama.clone()).collect())
            .unwrap_or_default()
    }

    pub fn view_records(&self) -> usize {
        self.state.lock().unwrap().views.len()
    }

    fn detail(state: &State, record: &ProfileRecord) -> ProfileDetail {
        let skills = state
            .skills
            .get(&record.id)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .map(|(i, s)| {
                        SkillView::from_record(
                            SkillRecord {
                                id: record.id * 100 + i as i32,
                                profile_id: record.id,
                                nama: s.nama.clone(),
                                level: s.level.clone(),
                            },
                            Vec::new(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        let pengalaman = state
            .experiences
            .get(&record.id)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .map(|(i, e)| ExperienceRecord {
                        id: i as i32 + 1,
                        posisi: e.posisi.clone(),
                        organisasi: e.organisasi.clone(),
                        tahun_mulai: e.tahun_mulai.clone(),
                        tahun_selesai: e.tahun_selesai.clone(),
                        deskripsi: e.deskripsi.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        ProfileDetail {
            profile: record.clone(),
            username: state
                .usernames
                .get(&record.user_id)
                .cloned()
                .unwrap_or_default(),
            skills,
            pengalaman,
            talents: Vec::new(),
        }
    }

    fn card(state: &State, record: &ProfileRecord) -> ProfileCard {
        ProfileCard {
            id: record.id,
            nama: record.nama.clone(),
            nim: record.nim.clone(),
            prodi: record.prodi.clone(),
            angkatan: record.angkatan.clone(),
            fakultas: record.fakultas.clone(),
            email: record.email.clone(),
            foto_profil: record.foto_profil.clone(),
            bio: record.bio.clone(),
            is_active: record.is_active,
            skills_count: state.skills.get(&record.id).map_or(0, |s| s.len() as u64),
            talents_count: 0,
            views_count: record.views_count,
            created_at: record.created_at,
        }
    }

    fn replace_lists(state: &mut State, profile_id: i32, lists: ProfileLists) {
        if let Some(skills) = lists.skills {
            state.skills.insert(profile_id, skills);
        }
        if let Some(experiences) = lists.experiences {
            state.experiences.insert(profile_id, experiences);
        }
    }
}

fn set<T>(target: &mut T, patch: PatchField<T>) {
    if let PatchField::Value(v) = patch {
        *target = v;
    }
}

fn set_nullable<T>(target: &mut Option<T>, patch: PatchField<T>) {
    if let Some(v) = patch.into_nullable() {
        *target = v;
    }
}

fn apply_patch(record: &mut ProfileRecord, patch: ProfilePatch) {
    set(&mut record.nama, patch.nama);
    set(&mut record.nim, patch.nim);
    set(&mut record.prodi, patch.prodi);
    set(&mut record.email, patch.email);
    set_nullable(&mut record.angkatan, patch.angkatan);
    set_nullable(&mut record.fakultas, patch.fakultas);
    set_nullable(&mut record.telepon, patch.telepon);
    set_nullable(&mut record.alamat, patch.alamat);
    set_nullable(&mut record.foto_profil, patch.foto_profil);
    set_nullable(&mut record.bio, patch.bio);
    set_nullable(&mut record.tanggal_lahir, patch.tanggal_lahir);
    set_nullable(&mut record.linkedin, patch.linkedin);
    set_nullable(&mut record.github, patch.github);
    set_nullable(&mut record.instagram, patch.instagram);
    set_nullable(&mut record.website, patch.website);
}

#[async_trait]
impl ProfileQuery for InMemoryProfiles {
    async fn find_by_id(&self, profile_id: i32) -> Result<Option<ProfileRecord>, ProfileQueryError> {
        Ok(self.profile(profile_id))
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, ProfileQueryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn find_detail(
        &self,
        profile_id: i32,
    ) -> Result<Option<ProfileDetail>, ProfileQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .profiles
            .iter()
            .find(|p| p.id == profile_id)
            .map(|p| Self::detail(&state, p)))
    }

    async fn find_details(
        &self,
        profile_ids: &[i32],
    ) -> Result<Vec<ProfileDetail>, ProfileQueryError> {
        let state = self.state.lock().unwrap();
        Ok(profile_ids
            .iter()
            .filter_map(|id| state.profiles.iter().find(|p| p.id == *id))
            .map(|p| Self::detail(&state, p))
            .collect())
    }

    async fn nim_taken_by_other(
        &self,
        nim: &str,
        user_id: Uuid,
    ) -> Result<bool, ProfileQueryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .profiles
            .iter()
            .any(|p| p.nim == nim && p.user_id != user_id))
    }

    async fn list(
        &self,
        filter: &ProfileListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProfileCard>, ProfileQueryError> {
        let state = self.state.lock().unwrap();
        let matching: Vec<_> = state
            .profiles
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| filter.prodi.as_ref().map_or(true, |v| &p.prodi == v))
            .filter(|p| filter.is_active.map_or(true, |v| p.is_active == v))
            .collect();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .map(|p| Self::card(&state, p))
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn latest(&self, limit: u64) -> Result<Vec<ProfileCard>, ProfileQueryError> {
        let state = self.state.lock().unwrap();
        let mut active: Vec<_> = state.profiles.iter().filter(|p| p.is_active).collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active
            .into_iter()
            .take(limit as usize)
            .map(|p| Self::card(&state, p))
            .collect())
    }

    async fn most_viewed(&self, limit: u64) -> Result<Vec<ProfileCard>, ProfileQueryError> {
        let state = self.state.lock().unwrap();
        let mut active: Vec<_> = state.profiles.iter().filter(|p| p.is_active).collect();
        active.sort_by(|a, b| b.views_count.cmp(&a.views_count).then(a.id.cmp(&b.id)));
        Ok(active
            .into_iter()
            .take(limit as usize)
            .map(|p| Self::card(&state, p))
            .collect())
    }

    async fn skill_names(&self, profile_id: i32) -> Result<Vec<String>, ProfileQueryError> {
        Ok(self.skill_names_of(profile_id))
    }

    async fn recommendation_candidates(
        &self,
        exclude_id: i32,
        _skill_names: &[String],
        _limit: u64,
    ) -> Result<Vec<Candidate>, ProfileQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .profiles
            .iter()
            .filter(|p| p.is_active && p.id != exclude_id)
            .map(|p| Candidate {
                profile_id: p.id,
                views_count: p.views_count,
                skills: state
                    .skills
                    .get(&p.id)
                    .map(|s| s.iter().map(|s| s.nama.clone()).collect())
                    .unwrap_or_default(),
            })
            .collect())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn create(
        &self,
        user_id: Uuid,
        profile: NewProfile,
        lists: ProfileLists,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.profiles.iter().any(|p| p.user_id == user_id) {
            return Err(ProfileRepositoryError::AlreadyExists);
        }
        if state.profiles.iter().any(|p| p.nim == profile.nim) {
            return Err(ProfileRepositoryError::NimTaken);
        }

        state.next_id += 1;
        let id = state.next_id;
        let record = ProfileRecord {
            nama: profile.nama,
            nim: profile.nim,
            prodi: profile.prodi,
            email: profile.email,
            angkatan: profile.angkatan,
            fakultas: profile.fakultas,
            telepon: profile.telepon,
            alamat: profile.alamat,
            foto_profil: profile.foto_profil,
            bio: profile.bio,
            tanggal_lahir: profile.tanggal_lahir,
            linkedin: profile.linkedin,
            github: profile.github,
            instagram: profile.instagram,
            website: profile.website,
            ..profile_record(id, user_id, "")
        };
        state.profiles.push(record.clone());
        Self::replace_lists(&mut state, id, lists);
        Ok(record)
    }

    async fn update(
        &self,
        profile_id: i32,
        patch: ProfilePatch,
        lists: ProfileLists,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let record = state
            .profiles
            .iter_mut()
            .find(|p| p.id == profile_id)
            .ok_or(ProfileRepositoryError::NotFound)?;
        apply_patch(record, patch);
        record.updated_at = Utc::now();
        let record = record.clone();
        Self::replace_lists(&mut state, profile_id, lists);
        Ok(record)
    }

    async fn delete(&self, profile_id: i32) -> Result<(), ProfileRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.profiles.len();
        state.profiles.retain(|p| p.id != profile_id);
        if state.profiles.len() == before {
            return Err(ProfileRepositoryError::NotFound);
        }
        state.skills.remove(&profile_id);
        state.experiences.remove(&profile_id);
        Ok(())
    }

    async fn increment_views(
        &self,
        profile_id: i32,
    ) -> Result<Option<(String, i32)>, ProfileRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Ok(state
            .profiles
            .iter_mut()
            .find(|p| p.id == profile_id)
            .map(|p| {
                p.views_count += 1;
                (p.nama.clone(), p.views_count)
            }))
    }

    async fn record_view(
        &self,
        profile_id: i32,
        context: &ViewContext,
    ) -> Result<bool, ProfileRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let seen = state.views.iter().any(|(id, viewer, session)| {
            *id == profile_id
                && ((context.viewer.is_some() && *viewer == context.viewer)
                    || (context.session_key.is_some() && *session == context.session_key))
        });
        if seen {
            return Ok(false);
        }
        state
            .views
            .push((profile_id, context.viewer, context.session_key.clone()));
        Ok(true)
    }

    async fn toggle_active(
        &self,
        profile_id: i32,
    ) -> Result<Option<bool>, ProfileRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Ok(state
            .profiles
            .iter_mut()
            .find(|p| p.id == profile_id)
            .map(|p| {
                p.is_active = !p.is_active;
                p.is_active
            }))
    }
}
