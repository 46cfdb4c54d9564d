use crate::modules::document::application::domain::cv_layout::CvLayout;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct RenderError(pub String);

/// Turns a laid-out CV into PDF bytes.
pub trait CvRenderer: Send + Sync {
    fn render(&self, title: &str, layout: &CvLayout) -> Result<Vec<u8>, RenderError>;
}
