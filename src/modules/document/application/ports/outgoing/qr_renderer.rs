use super::cv_renderer::RenderError;

/// Encodes text as a PNG QR code.
pub trait QrRenderer: Send + Sync {
    fn render(&self, payload: &str) -> Result<Vec<u8>, RenderError>;
}
