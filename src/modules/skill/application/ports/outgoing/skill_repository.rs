use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{NewSkill, SkillPatch, SkillRecord};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(
        &self,
        profile_id: i32,
        skill: NewSkill,
    ) -> Result<SkillRecord, SkillRepositoryError>;

    async fn patch_skill(
        &self,
        skill_id: i32,
        patch: SkillPatch,
    ) -> Result<SkillRecord, SkillRepositoryError>;

    async fn delete_skill(&self, skill_id: i32) -> Result<(), SkillRepositoryError>;
}
