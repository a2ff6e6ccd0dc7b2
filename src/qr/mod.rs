//! QR code rendering and scanning
//!
//! Symbol generation is delegated to `qrcode`; scanning back with `rqrr` lets
//! generated images be verified and codes be decoded straight from a PNG.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::QrEncoder;
