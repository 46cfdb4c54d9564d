mod printpdf_cv_renderer;
mod qrcode_png_renderer;

pub use printpdf_cv_renderer::PrintPdfCvRenderer;
pub use qrcode_png_renderer::QrCodePngRenderer;
