use async_trait::async_trait;

use crate::modules::talent::application::domain::entities::{
    NewTalent, TalentPatch, TalentRecord,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TalentRepositoryError {
    #[error("Talent not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TalentRepository: Send + Sync {
    async fn create_talent(
        &self,
        profile_id: i32,
        talent: NewTalent,
    ) -> Result<TalentRecord, TalentRepositoryError>;

    async fn patch_talent(
        &self,
        talent_id: i32,
        patch: TalentPatch,
    ) -> Result<TalentRecord, TalentRepositoryError>;

    async fn delete_talent(&self, talent_id: i32) -> Result<(), TalentRepositoryError>;
}
