use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct QrImage {
    /// Used when the caller asks for a download.
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQrError {
    #[error("Profile not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("{0}")]
    RenderFailed(String),
}

#[async_trait]
pub trait ProfileQrUseCase: Send + Sync {
    /// QR code pointing at the public talent page `<base_url>/talent/<id>`.
    async fn execute(&self, profile_id: i32, base_url: &str) -> Result<QrImage, ProfileQrError>;
}
