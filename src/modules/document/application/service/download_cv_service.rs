use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::document::application::domain::cv_layout::layout_cv;
use crate::modules::document::application::domain::filename::cv_filename;
use crate::modules::document::application::ports::incoming::use_cases::{
    CvFile, DownloadCvError, DownloadCvUseCase,
};
use crate::modules::document::application::ports::outgoing::CvRenderer;
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct DownloadCvService<Q: ProfileQuery, R: CvRenderer> {
    profiles: Q,
    renderer: R,
}

impl<Q: ProfileQuery, R: CvRenderer> DownloadCvService<Q, R> {
    pub fn new(profiles: Q, renderer: R) -> Self {
        Self { profiles, renderer }
    }
}

#[async_trait]
impl<Q: ProfileQuery, R: CvRenderer> DownloadCvUseCase for DownloadCvService<Q, R> {
    async fn execute(&self, profile_id: i32) -> Result<CvFile, DownloadCvError> {
        // inactive profiles are still downloadable
        let detail = self
            .profiles
            .find_detail(profile_id)
            .await
            .map_err(|e| DownloadCvError::QueryError(e.to_string()))?
            .ok_or(DownloadCvError::NotFound)?;

        let layout = layout_cv(&detail, Utc::now().date_naive());
        let title = format!("CV - {}", detail.profile.nama);
        let bytes = self
            .renderer
            .render(&title, &layout)
            .map_err(|e| DownloadCvError::RenderFailed(e.to_string()))?;

        info!(profile_id, pages = layout.pages.len(), "CV generated");

        Ok(CvFile {
            filename: cv_filename(&detail.profile.nama),
            bytes,
        })
    }
}
