//! Error types for qrstamp operations

use thiserror::Error;

/// Result type alias using qrstamp's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrstamp operations
#[derive(Error, Debug)]
pub enum Error {
    /// Requested protocol version has no encoding scheme
    #[error("Unsupported protocol version: {0} (expected 4 or 5)")]
    UnsupportedVersion(u8),

    /// Dictionary passed alongside a scheme belongs to another scheme
    #[error("Substitution dictionary does not belong to scheme {0}")]
    DictionaryMismatch(crate::codec::EncodingScheme),

    /// Code contains a symbol outside the substitution dictionary
    #[error("Unknown symbol '{symbol}' at position {position}")]
    Decode {
        /// The offending character
        symbol: char,
        /// Zero-based character offset inside the code
        position: usize,
    },

    /// Substituted digit string is not a valid integer
    #[error("Failed to parse decoded digits: {0}")]
    Parse(String),

    /// Timestamp cannot be represented by the selected scheme
    #[error("Timestamp {millis}ms cannot be encoded: {reason}")]
    TimestampOutOfRange {
        /// Milliseconds since the Unix epoch
        millis: i64,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Payload text does not follow the scheme's layout
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrCodeFound,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Other(format!("JSON error: {}", e))
    }
}
