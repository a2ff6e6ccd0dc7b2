//! Timestamp → payload encoding

use crate::codec::{EncodingScheme, Payload, SubstitutionDictionary};
use crate::error::{Error, Result};
use chrono::{DateTime, TimeZone};

/// Number of decimal digits in a V4 code (millisecond epochs up to year 2286)
pub const V4_CODE_WIDTH: usize = 13;

/// Build the payload embedded in a friend's QR code for the instant `at`.
pub fn generate_data<Tz: TimeZone>(
    at: &DateTime<Tz>,
    friend_id: &str,
    dict: &SubstitutionDictionary,
    scheme: EncodingScheme,
) -> Result<Payload> {
    let millis = at.timestamp_millis();
    let code = time_to_code(millis, dict, scheme)?;
    tracing::debug!(%scheme, millis, %code, friend_id, "Encoded timestamp");

    Ok(Payload {
        scheme,
        friend_id: friend_id.to_string(),
        code,
    })
}

/// Render a millisecond epoch as the scheme's digit string and substitute it.
///
/// `dict` must be the scheme's own dictionary.
pub fn time_to_code(
    millis: i64,
    dict: &SubstitutionDictionary,
    scheme: EncodingScheme,
) -> Result<String> {
    if dict != scheme.dictionary() {
        return Err(Error::DictionaryMismatch(scheme));
    }
    if millis < 0 {
        return Err(Error::TimestampOutOfRange {
            millis,
            reason: "timestamps before the Unix epoch are not encodable",
        });
    }

    let digits = match scheme {
        EncodingScheme::V4 => {
            let digits = format!("{millis:0width$}", width = V4_CODE_WIDTH);
            if digits.len() > V4_CODE_WIDTH {
                return Err(Error::TimestampOutOfRange {
                    millis,
                    reason: "V4 codes hold at most 13 decimal digits",
                });
            }
            digits
        }
        EncodingScheme::V5 => format!("{millis:x}"),
    };

    dict.substitute_all(&digits)
}
