use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{SkillOwner, SkillView};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// All skills, optionally restricted to one profile, ordered by id.
    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<SkillView>, SkillQueryError>;

    async fn find_by_id(&self, skill_id: i32) -> Result<Option<SkillView>, SkillQueryError>;

    async fn find_owner(&self, skill_id: i32) -> Result<Option<SkillOwner>, SkillQueryError>;

    /// Profile id belonging to a user, if the user has one.
    async fn find_profile_id_by_user(&self, user_id: Uuid)
        -> Result<Option<i32>, SkillQueryError>;
}
