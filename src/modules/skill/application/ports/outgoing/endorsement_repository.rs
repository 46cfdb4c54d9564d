use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::Endorsement;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EndorsementRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EndorsementRepository: Send + Sync {
    /// Inserts the pair unless it already exists.
    ///
    /// Returns `None` when the endorsement was already present.
    async fn insert_if_absent(
        &self,
        skill_id: i32,
        endorsed_by: Uuid,
    ) -> Result<Option<Endorsement>, EndorsementRepositoryError>;

    async fn find(
        &self,
        skill_id: i32,
        endorsed_by: Uuid,
    ) -> Result<Option<Endorsement>, EndorsementRepositoryError>;

    /// Returns whether a row was deleted.
    async fn delete(
        &self,
        skill_id: i32,
        endorsed_by: Uuid,
    ) -> Result<bool, EndorsementRepositoryError>;
}
