use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    ProfileCard, ProfileDetail, ProfileRecord,
};
use crate::modules::profile::application::domain::listing::ProfileListFilter;
use crate::modules::profile::application::domain::recommendation::Candidate;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_id(&self, profile_id: i32) -> Result<Option<ProfileRecord>, ProfileQueryError>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, ProfileQueryError>;

    async fn find_detail(&self, profile_id: i32)
        -> Result<Option<ProfileDetail>, ProfileQueryError>;

    /// Details in the order of `profile_ids`; unknown ids are skipped.
    async fn find_details(&self, profile_ids: &[i32])
        -> Result<Vec<ProfileDetail>, ProfileQueryError>;

    /// True when another identity's profile already uses `nim`.
    async fn nim_taken_by_other(&self, nim: &str, user_id: Uuid)
        -> Result<bool, ProfileQueryError>;

    async fn list(
        &self,
        filter: &ProfileListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProfileCard>, ProfileQueryError>;

    async fn latest(&self, limit: u64) -> Result<Vec<ProfileCard>, ProfileQueryError>;

    async fn most_viewed(&self, limit: u64) -> Result<Vec<ProfileCard>, ProfileQueryError>;

    async fn skill_names(&self, profile_id: i32) -> Result<Vec<String>, ProfileQueryError>;

    /// Active profiles other than `exclude_id`.
    ///
    /// With `skill_names` empty this is the `limit` most viewed; otherwise the
    /// profiles holding a skill named like any of them, carrying only the
    /// matching names.
    async fn recommendation_candidates(
        &self,
        exclude_id: i32,
        skill_names: &[String],
        limit: u64,
    ) -> Result<Vec<Candidate>, ProfileQueryError>;
}
