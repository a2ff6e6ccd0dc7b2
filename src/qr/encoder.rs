//! QR code renderer

use crate::error::{Error, Result};
use image::{DynamicImage, Luma};
use qrcode::QrCode;

/// Renders payload text into QR code images
pub struct QrEncoder {
    /// Error correction level
    ecc_level: qrcode::EcLevel,
    /// Minimum edge length of the rendered image in pixels
    min_dimension: u32,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC, 400px)
    pub fn new() -> Self {
        Self {
            ecc_level: qrcode::EcLevel::M,
            min_dimension: 400,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ecc_level(ecc_level: qrcode::EcLevel) -> Self {
        Self {
            ecc_level,
            ..Self::new()
        }
    }

    /// Render `data` into a grayscale QR code image
    pub fn render(&self, data: &str) -> Result<DynamicImage> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.ecc_level)
            .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {}", e)))?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.min_dimension, self.min_dimension)
            .build();

        Ok(DynamicImage::ImageLuma8(image))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
