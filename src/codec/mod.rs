//! Timestamp payload codec
//!
//! A payload hides the moment a QR code was generated behind a simple
//! letter substitution: the millisecond epoch is rendered as decimal (V4) or
//! hexadecimal (V5) digits and every digit is swapped for a letter from the
//! scheme's [`SubstitutionDictionary`].

mod decoder;
mod dictionary;
mod encoder;
mod payload;

pub use decoder::{char_to_millis, char_to_time, split_payload};
pub use dictionary::SubstitutionDictionary;
pub use encoder::{V4_CODE_WIDTH, generate_data, time_to_code};
pub use payload::Payload;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Protocol version selecting the dictionary and payload layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EncodingScheme {
    /// Fourth anniversary: 13 fixed-width decimal digits, comma separated
    #[default]
    V4,
    /// Fifth anniversary: variable-width hexadecimal digits, no id separator
    V5,
}

impl EncodingScheme {
    /// Numeric protocol version
    pub fn version(self) -> u8 {
        match self {
            EncodingScheme::V4 => 4,
            EncodingScheme::V5 => 5,
        }
    }

    /// Radix of the digit string fed through the dictionary
    pub fn radix(self) -> u32 {
        match self {
            EncodingScheme::V4 => 10,
            EncodingScheme::V5 => 16,
        }
    }

    /// Dictionary shared by every encode/decode call of this scheme
    pub fn dictionary(self) -> &'static SubstitutionDictionary {
        SubstitutionDictionary::for_scheme(self)
    }
}

impl TryFrom<u8> for EncodingScheme {
    type Error = Error;

    fn try_from(version: u8) -> Result<Self> {
        match version {
            4 => Ok(EncodingScheme::V4),
            5 => Ok(EncodingScheme::V5),
            other => Err(Error::UnsupportedVersion(other)),
        }
    }
}

impl From<EncodingScheme> for u8 {
    fn from(scheme: EncodingScheme) -> Self {
        scheme.version()
    }
}

impl FromStr for EncodingScheme {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let trimmed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        let version = trimmed
            .parse::<u8>()
            .map_err(|e| Error::Config(format!("Invalid protocol version '{value}': {e}")))?;
        Self::try_from(version)
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version())
    }
}
