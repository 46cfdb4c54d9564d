pub mod cv_renderer;
pub mod qr_renderer;

pub use cv_renderer::{CvRenderer, RenderError};
pub use qr_renderer::QrRenderer;
