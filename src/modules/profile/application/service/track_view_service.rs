use async_trait::async_trait;
use tracing::{debug, warn};

use crate::modules::profile::application::domain::entities::{ViewContext, ViewOutcome};
use crate::modules::profile::application::ports::incoming::use_cases::{
    TrackViewError, TrackViewUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

/// Counts every visit and keeps one view record per viewer or session.
pub struct TrackViewService<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> TrackViewService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProfileRepository> TrackViewUseCase for TrackViewService<R> {
    async fn execute(
        &self,
        profile_id: i32,
        context: ViewContext,
    ) -> Result<ViewOutcome, TrackViewError> {
        let (profile_name, total_views) = self
            .repository
            .increment_views(profile_id)
            .await
            .map_err(|e| TrackViewError::RepositoryError(e.to_string()))?
            .ok_or(TrackViewError::NotFound)?;

        // The counter is authoritative; a failed analytics insert only loses the record.
        // Anonymous rows without a session key are never deduplicated, so they are not unique views.
        let unique_view = match self.repository.record_view(profile_id, &context).await {
            Ok(inserted) => inserted && context.is_identifiable(),
            Err(e) => {
                warn!(profile_id, error = %e, "Failed to store profile view record");
                false
            }
        };

        debug!(profile_id, total_views, unique_view, "Profile view tracked");

        Ok(ViewOutcome {
            profile_id,
            profile_name,
            total_views,
            unique_view,
        })
    }
}
