//! Payload text carried in a QR code's data field

use crate::codec::EncodingScheme;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker leading every payload. V5 payloads reuse the V4 marker so that the
/// scanning app keeps accepting them.
pub(crate) const PAYLOAD_MARKER: &str = "4";

/// An encoded friend/timestamp pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Scheme that produced `code`
    pub scheme: EncodingScheme,
    /// Friend identifier, copied verbatim
    pub friend_id: String,
    /// Substituted timestamp digits
    pub code: String,
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scheme {
            EncodingScheme::V4 => write!(f, "{PAYLOAD_MARKER},{},{}", self.friend_id, self.code),
            EncodingScheme::V5 => write!(f, "{PAYLOAD_MARKER},{}{}", self.friend_id, self.code),
        }
    }
}
