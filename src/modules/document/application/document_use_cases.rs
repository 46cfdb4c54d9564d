use std::sync::Arc;

use crate::modules::document::application::ports::incoming::use_cases::{
    DownloadCvUseCase, ProfileQrUseCase,
};

#[derive(Clone)]
pub struct DocumentUseCases {
    pub download_cv: Arc<dyn DownloadCvUseCase + Send + Sync>,
    pub qr_code: Arc<dyn ProfileQrUseCase + Send + Sync>,
}
