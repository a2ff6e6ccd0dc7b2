//! QRSTAMP - timestamped friend QR codes
//!
//! Every friend in the registry gets a QR code whose payload carries their
//! identifier and the generation time, disguised as letters through a fixed
//! substitution dictionary. The same dictionary turns a scanned code back
//! into a POSIX timestamp.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use qrstamp::{EncodingScheme, char_to_time, generate_data};
//!
//! let scheme = EncodingScheme::V4;
//! let at = Utc.timestamp_millis_opt(1234).unwrap();
//! let payload = generate_data(&at, "abcd1234", scheme.dictionary(), scheme)?;
//! assert_eq!(payload.to_string(), "4,abcd1234,AAAAAAAAABCDE");
//!
//! let seconds = char_to_time(&payload.code, scheme.dictionary())?;
//! assert_eq!(seconds, 1.234);
//! # Ok::<(), qrstamp::Error>(())
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod codec;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod output;
pub mod qr;

// Re-exports for convenience
pub use error::{Error, Result};

pub use codec::{
    EncodingScheme, Payload, SubstitutionDictionary, char_to_millis, char_to_time,
    generate_data, split_payload, time_to_code,
};
pub use config::{LogRotation, LoggingOptions, OutputOptions, QrstampConfig};
pub use generate::{Clock, Friend, GeneratedCode, QrGenerator, SystemClock};
pub use qr::{QrDecoder, QrEncoder};
