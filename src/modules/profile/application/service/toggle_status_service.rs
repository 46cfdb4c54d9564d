use async_trait::async_trait;
use tracing::info;

use crate::modules::profile::application::domain::entities::ToggleOutcome;
use crate::modules::profile::application::ports::incoming::use_cases::{
    ToggleStatusError, ToggleStatusUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct ToggleStatusService<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> ToggleStatusService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProfileRepository> ToggleStatusUseCase for ToggleStatusService<R> {
    async fn execute(&self, profile_id: i32) -> Result<ToggleOutcome, ToggleStatusError> {
        let is_active = self
            .repository
            .toggle_active(profile_id)
            .await
            .map_err(|e| ToggleStatusError::RepositoryError(e.to_string()))?
            .ok_or(ToggleStatusError::NotFound)?;

        info!(profile_id, is_active, "Profile status toggled");
        Ok(ToggleOutcome::new(is_active))
    }
}
