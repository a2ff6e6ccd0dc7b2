//! Code → timestamp decoding

use crate::codec::payload::PAYLOAD_MARKER;
use crate::codec::{EncodingScheme, Payload, SubstitutionDictionary};
use crate::error::{Error, Result};

/// Decode a code into a POSIX timestamp in seconds (fractional milliseconds kept).
pub fn char_to_time(code: &str, dict: &SubstitutionDictionary) -> Result<f64> {
    let millis = char_to_millis(code, dict)?;
    Ok(millis as f64 / 1000.0)
}

/// Decode a code into milliseconds since the Unix epoch.
///
/// The restored digits are read in the dictionary's own radix, so the V5
/// dictionary decodes hexadecimal codes.
pub fn char_to_millis(code: &str, dict: &SubstitutionDictionary) -> Result<i64> {
    let digits = dict.restore_all(code)?;
    if digits.is_empty() {
        return Err(Error::Parse("empty code".to_string()));
    }

    let radix = dict.digits().len() as u32;
    let millis = i64::from_str_radix(&digits, radix)
        .map_err(|e| Error::Parse(format!("'{digits}' (radix {radix}): {e}")))?;
    tracing::debug!(code, %digits, millis, "Decoded code");
    Ok(millis)
}

/// Split a scanned payload back into its friend identifier and code.
///
/// V5 payloads carry no separator between the friend id and the code, so the
/// id is matched against `known_ids`. Exactly one id may leave a valid V5 code
/// behind; several matches are rejected rather than guessed.
pub fn split_payload(text: &str, scheme: EncodingScheme, known_ids: &[&str]) -> Result<Payload> {
    let rest = text
        .strip_prefix(PAYLOAD_MARKER)
        .and_then(|rest| rest.strip_prefix(','))
        .ok_or_else(|| {
            Error::MalformedPayload(format!("'{text}' does not start with '{PAYLOAD_MARKER},'"))
        })?;

    match scheme {
        EncodingScheme::V4 => {
            let (friend_id, code) = rest.split_once(',').ok_or_else(|| {
                Error::MalformedPayload(format!("'{text}' is missing the code separator"))
            })?;
            if code.contains(',') {
                return Err(Error::MalformedPayload(format!(
                    "'{text}' has more than three fields"
                )));
            }
            Ok(Payload {
                scheme,
                friend_id: friend_id.to_string(),
                code: code.to_string(),
            })
        }
        EncodingScheme::V5 => {
            let dict = scheme.dictionary();
            let mut candidates = known_ids
                .iter()
                .filter_map(|id| rest.strip_prefix(id).map(|code| (*id, code)))
                .filter(|(_, code)| !code.is_empty() && dict.restore_all(code).is_ok());

            let (friend_id, code) = candidates.next().ok_or_else(|| {
                Error::MalformedPayload(format!("'{text}' matches no known friend id"))
            })?;
            if let Some((other, _)) = candidates.find(|(other, _)| *other != friend_id) {
                return Err(Error::MalformedPayload(format!(
                    "'{text}' has an ambiguous friend id ('{friend_id}' or '{other}')"
                )));
            }

            Ok(Payload {
                scheme,
                friend_id: friend_id.to_string(),
                code: code.to_string(),
            })
        }
    }
}
