//! Helpers for rendering command results as JSON and human-readable text

use crate::codec::EncodingScheme;
use crate::generate::GeneratedCode;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

/// Combined structured and human-readable representation of a result
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Structured JSON representation suitable for downstream consumers
    pub json: Value,
    /// Human-readable lines for terminal presentation
    pub human: Vec<String>,
}

/// A decoded code and what it was decoded from
#[derive(Debug, Clone)]
pub struct DecodedTimestamp {
    /// Code that was decoded
    pub code: String,
    /// Friend identifier, when decoded from a full payload
    pub friend_id: Option<String>,
    /// Scheme whose dictionary was used
    pub scheme: EncodingScheme,
    /// Milliseconds since the Unix epoch
    pub millis: i64,
}

impl DecodedTimestamp {
    /// POSIX timestamp in seconds
    pub fn seconds(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    fn utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis)
    }
}

/// Render a decoded timestamp.
pub fn render_decoded(decoded: &DecodedTimestamp) -> Rendered {
    let iso = decoded
        .utc()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true));

    let json = json!({
        "code": decoded.code,
        "friend_id": decoded.friend_id,
        "version": decoded.scheme.version(),
        "timestamp": decoded.seconds(),
        "utc": iso,
    });

    let mut human = vec![format!("timestamp={}", decoded.code)];
    if let Some(friend_id) = &decoded.friend_id {
        human.push(format!("friend id={friend_id}"));
    }
    human.push(format!("Decoded timestamp={}", decoded.seconds()));
    if let Some(iso) = iso {
        human.push(format!("  UTC: {iso}"));
    }

    Rendered { json, human }
}

/// Render the outcome of a `create` run.
pub fn render_generated(codes: &[GeneratedCode]) -> Rendered {
    let entries: Vec<Value> = codes
        .iter()
        .map(|code| {
            json!({
                "friend": code.friend.name,
                "friend_id": code.friend.id,
                "data": code.payload.to_string(),
                "path": code.path.display().to_string(),
                "created_at": code.created_at.to_rfc3339(),
            })
        })
        .collect();

    let mut human = Vec::with_capacity(codes.len() * 2);
    for code in codes {
        human.push(format!("data={}", code.payload));
        human.push(format!(
            "QR code created with timestamp {} -> {}",
            code.created_at.format("%Y-%m-%d %H:%M:%S%.6f"),
            code.path.display()
        ));
    }

    Rendered {
        json: Value::Array(entries),
        human,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_decoded_json() {
        let decoded = DecodedTimestamp {
            code: "AAAAAAAAABCDE".to_string(),
            friend_id: Some("abcd1234".to_string()),
            scheme: EncodingScheme::V4,
            millis: 1234,
        };

        let rendered = render_decoded(&decoded);
        assert_eq!(rendered.json["timestamp"], json!(1.234));
        assert_eq!(rendered.json["version"], json!(4));
        assert_eq!(rendered.json["utc"], json!("1970-01-01T00:00:01.234Z"));
        assert!(
            rendered
                .human
                .contains(&"Decoded timestamp=1.234".to_string())
        );
    }

    #[test]
    fn test_render_decoded_without_friend() {
        let decoded = DecodedTimestamp {
            code: "B".to_string(),
            friend_id: None,
            scheme: EncodingScheme::V5,
            millis: 0,
        };

        let rendered = render_decoded(&decoded);
        assert_eq!(rendered.json["friend_id"], Value::Null);
        assert!(!rendered.human.iter().any(|l| l.starts_with("friend id")));
    }
}
