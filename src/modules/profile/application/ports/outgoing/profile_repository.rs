use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    NewProfile, ProfileLists, ProfilePatch, ProfileRecord, ViewContext,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("NIM already registered")]
    NimTaken,

    #[error("User already has a profile")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts the profile and its lists in one transaction.
    async fn create(
        &self,
        user_id: Uuid,
        profile: NewProfile,
        lists: ProfileLists,
    ) -> Result<ProfileRecord, ProfileRepositoryError>;

    /// Applies the patch and replaces supplied lists in one transaction.
    async fn update(
        &self,
        profile_id: i32,
        patch: ProfilePatch,
        lists: ProfileLists,
    ) -> Result<ProfileRecord, ProfileRepositoryError>;

    async fn delete(&self, profile_id: i32) -> Result<(), ProfileRepositoryError>;

    /// Atomically adds one view; `None` when the profile does not exist.
    async fn increment_views(
        &self,
        profile_id: i32,
    ) -> Result<Option<(String, i32)>, ProfileRepositoryError>;

    /// Stores a view record unless the viewer or session already has one.
    /// Returns whether a row was written.
    async fn record_view(
        &self,
        profile_id: i32,
        context: &ViewContext,
    ) -> Result<bool, ProfileRepositoryError>;

    /// Flips `is_active`; `None` when the profile does not exist.
    async fn toggle_active(&self, profile_id: i32) -> Result<Option<bool>, ProfileRepositoryError>;
}
