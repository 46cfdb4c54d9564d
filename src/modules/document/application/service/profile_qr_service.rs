use async_trait::async_trait;

use crate::modules::document::application::domain::filename::qr_filename;
use crate::modules::document::application::ports::incoming::use_cases::{
    ProfileQrError, ProfileQrUseCase, QrImage,
};
use crate::modules::document::application::ports::outgoing::QrRenderer;
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub fn talent_page_url(base_url: &str, profile_id: i32) -> String {
    format!("{}/talent/{}", base_url.trim_end_matches('/'), profile_id)
}

pub struct ProfileQrService<Q: ProfileQuery, R: QrRenderer> {
    profiles: Q,
    renderer: R,
}

impl<Q: ProfileQuery, R: QrRenderer> ProfileQrService<Q, R> {
    pub fn new(profiles: Q, renderer: R) -> Self {
        Self { profiles, renderer }
    }
}

#[async_trait]
impl<Q: ProfileQuery, R: QrRenderer> ProfileQrUseCase for ProfileQrService<Q, R> {
    async fn execute(&self, profile_id: i32, base_url: &str) -> Result<QrImage, ProfileQrError> {
        let profile = self
            .profiles
            .find_by_id(profile_id)
            .await
            .map_err(|e| ProfileQrError::QueryError(e.to_string()))?
            .ok_or(ProfileQrError::NotFound)?;

        let bytes = self
            .renderer
            .render(&talent_page_url(base_url, profile_id))
            .map_err(|e| ProfileQrError::RenderFailed(e.to_string()))?;

        Ok(QrImage {
            filename: qr_filename(&profile.nama, profile_id),
            bytes,
        })
    }
}
