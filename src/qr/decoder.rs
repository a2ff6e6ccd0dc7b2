//! QR code scanner using rqrr

use crate::error::{Error, Result};
use image::DynamicImage;
use std::path::Path;

/// Reads payload text back out of QR code images
pub struct QrDecoder {}

impl QrDecoder {
    /// Create a new QR decoder with default settings
    pub fn new() -> Self {
        Self {}
    }

    /// Decode the first QR code found in an image
    pub fn decode(&self, img: &DynamicImage) -> Result<String> {
        let mut prepared = rqrr::PreparedImage::prepare(img.to_luma8());

        let grids = prepared.detect_grids();
        let grid = grids.first().ok_or(Error::NoQrCodeFound)?;

        match grid.decode() {
            Ok((meta, content)) => {
                tracing::debug!(
                    "Decoded QR: version={:?}, ecc_level={:?}, length={}",
                    meta.version,
                    meta.ecc_level,
                    content.len()
                );
                Ok(content)
            }
            Err(e) => Err(Error::QrDecode(format!("Decode failed: {:?}", e))),
        }
    }

    /// Open an image file and decode the first QR code in it
    pub fn decode_file(&self, path: &Path) -> Result<String> {
        let img = image::open(path)?;
        self.decode(&img)
    }
}

impl Default for QrDecoder {
    fn default() -> Self {
        Self::new()
    }
}
