use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{
    Endorsement, EndorsementView, NewSkill, SkillOwner, SkillPatch, SkillRecord, SkillView,
};
use crate::modules::skill::application::ports::outgoing::{
    EndorsementRepository, EndorsementRepositoryError, SkillQuery, SkillQueryError,
    SkillRepository, SkillRepositoryError,
};
use crate::shared::patch_field::PatchField;

#[derive(Default)]
struct State {
    profiles: HashMap<i32, Uuid>,
    skills: Vec<SkillRecord>,
    endorsements: Vec<Endorsement>,
    next_id: i32,
}

/// In-memory stand-in for every skill port; clones share state.
#[derive(Clone, Default)]
pub struct InMemorySkills {
    state: Arc<Mutex<State>>,
}

impl InMemorySkills {
    pub fn with_profile(self, profile_id: i32, user_id: Uuid) -> Self {
        self.state.lock().unwrap().profiles.insert(profile_id, user_id);
        self
    }

    pub fn with_skill(self, id: i32, profile_id: i32, nama: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.skills.push(SkillRecord {
                id,
                profile_id,
                nama: nama.to_string(),
                level: None,
            });
            state.next_id = state.next_id.max(id);
        }
        self
    }

    pub fn endorsement_count(&self, skill_id: i32) -> usize {
        self.state
            .lock()
            .unwrap()
            .endorsements
            .iter()
            .filter(|e| e.skill_id == skill_id)
            .count()
    }

    pub fn skill(&self, skill_id: i32) -> Option<SkillRecord> {
        self.state
            .lock()
            .unwrap()
            .skills
            .iter()
            .find(|s| s.id == skill_id)
            .cloned()
    }

    fn view(state: &State, record: &SkillRecord) -> SkillView {
        let endorsements = state
            .endorsements
            .iter()
            .filter(|e| e.skill_id == record.id)
            .map(|e| EndorsementView {
                id: e.id,
                skill_id: e.skill_id,
                endorsed_by: e.endorsed_by,
                endorsed_by_username: "someone".to_string(),
                created_at: e.created_at,
            })
            .collect();
        SkillView::from_record(record.clone(), endorsements)
    }
}

#[async_trait]
impl SkillQuery for InMemorySkills {
    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<SkillView>, SkillQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .skills
            .iter()
            .filter(|s| profile_id.map_or(true, |p| s.profile_id == p))
            .map(|s| Self::view(&state, s))
            .collect())
    }

    async fn find_by_id(&self, skill_id: i32) -> Result<Option<SkillView>, SkillQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .skills
            .iter()
            .find(|s| s.id == skill_id)
            .map(|s| Self::view(&state, s)))
    }

    async fn find_owner(&self, skill_id: i32) -> Result<Option<SkillOwner>, SkillQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.skills.iter().find(|s| s.id == skill_id).and_then(|s| {
            state.profiles.get(&s.profile_id).map(|user_id| SkillOwner {
                skill_id: s.id,
                profile_id: s.profile_id,
                user_id: *user_id,
            })
        }))
    }

    async fn find_profile_id_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<i32>, SkillQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .profiles
            .iter()
            .find(|(_, owner)| **owner == user_id)
            .map(|(id, _)| *id))
    }
}

#[async_trait]
impl SkillRepository for InMemorySkills {
    async fn create_skill(
        &self,
        profile_id: i32,
        skill: NewSkill,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let record = SkillRecord {
            id: state.next_id,
            profile_id,
            nama: skill.nama,
            level: skill.level,
        };
        state.skills.push(record.clone());
        Ok(record)
    }

    async fn patch_skill(
        &self,
        skill_id: i32,
        patch: SkillPatch,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let record = state
            .skills
            .iter_mut()
            .find(|s| s.id == skill_id)
            .ok_or(SkillRepositoryError::NotFound)?;
        if let PatchField::Value(nama) = patch.nama {
            record.nama = nama;
        }
        if let Some(level) = patch.level.into_nullable() {
            record.level = level;
        }
        Ok(record.clone())
    }

    async fn delete_skill(&self, skill_id: i32) -> Result<(), SkillRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.skills.len();
        state.skills.retain(|s| s.id != skill_id);
        if state.skills.len() == before {
            return Err(SkillRepositoryError::NotFound);
        }
        state.endorsements.retain(|e| e.skill_id != skill_id);
        Ok(())
    }
}

#[async_trait]
impl EndorsementRepository for InMemorySkills {
    async fn insert_if_absent(
        &self,
        skill_id: i32,
        endorsed_by: Uuid,
    ) -> Result<Option<Endorsement>, EndorsementRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state
            .endorsements
            .iter()
            .any(|e| e.skill_id == skill_id && e.endorsed_by == endorsed_by)
        {
            return Ok(None);
        }
        state.next_id += 1;
        let endorsement = Endorsement {
            id: state.next_id,
            skill_id,
            endorsed_by,
            created_at: Utc::now(),
        };
        state.endorsements.push(endorsement.clone());
        Ok(Some(endorsement))
    }

    async fn find(
        &self,
        skill_id: i32,
        endorsed_by: Uuid,
    ) -> Result<Option<Endorsement>, EndorsementRepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .endorsements
            .iter()
            .find(|e| e.skill_id == skill_id && e.endorsed_by == endorsed_by)
            .cloned())
    }

    async fn delete(
        &self,
        skill_id: i32,
        endorsed_by: Uuid,
    ) -> Result<bool, EndorsementRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.endorsements.len();
        state
            .endorsements
            .retain(|e| !(e.skill_id == skill_id && e.endorsed_by == endorsed_by));
        Ok(state.endorsements.len() != before)
    }
}
