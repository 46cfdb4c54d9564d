use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::modules::document::application::ports::outgoing::{QrRenderer, RenderError};

/// Pixels per QR module.
const MODULE_PX: u32 = 10;

/// Black-on-white PNG at error-correction level L with the standard
/// four-module quiet zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodePngRenderer;

impl QrRenderer for QrCodePngRenderer {
    fn render(&self, payload: &str) -> Result<Vec<u8>, RenderError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
            .map_err(|e| RenderError(format!("QR encoding failed: {e}")))?;

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(MODULE_PX, MODULE_PX)
            .build();

        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|e| RenderError(format!("PNG encoding failed: {e}")))?;

        Ok(png.into_inner())
    }
}
