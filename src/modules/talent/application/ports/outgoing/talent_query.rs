use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::talent::application::domain::entities::{TalentOwner, TalentRecord};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TalentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TalentQuery: Send + Sync {
    /// Newest first, optionally for a single profile.
    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<TalentRecord>, TalentQueryError>;

    async fn find_by_id(&self, talent_id: i32) -> Result<Option<TalentRecord>, TalentQueryError>;

    async fn find_owner(&self, talent_id: i32) -> Result<Option<TalentOwner>, TalentQueryError>;

    async fn find_profile_id_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<i32>, TalentQueryError>;
}
