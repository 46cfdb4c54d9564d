use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct CvFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DownloadCvError {
    #[error("Profile not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("{0}")]
    RenderFailed(String),
}

#[async_trait]
pub trait DownloadCvUseCase: Send + Sync {
    async fn execute(&self, profile_id: i32) -> Result<CvFile, DownloadCvError>;
}
