//! Per-friend QR code generation
//!
//! Each configured friend gets one PNG named after them and the moment the
//! code was generated, e.g. `Alice20240405143012.png`.

use crate::codec::{self, EncodingScheme, Payload};
use crate::error::{Error, Result};
use crate::qr::QrEncoder;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File-name stamp appended to the friend's name
const FILE_STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// A friend record from the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// Opaque identifier embedded verbatim in the payload
    pub id: String,
    /// Display name, used as the file-name prefix
    pub name: String,
}

/// Source of the generation timestamp
pub trait Clock {
    /// Current local time
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Result of generating one friend's code
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCode {
    /// Friend the code was generated for
    pub friend: Friend,
    /// Payload embedded in the image
    pub payload: Payload,
    /// Location of the written PNG
    pub path: PathBuf,
    /// Instant encoded in the payload
    pub created_at: DateTime<Local>,
}

/// Encodes, renders and writes friend QR codes into a directory
pub struct QrGenerator {
    scheme: EncodingScheme,
    dir: PathBuf,
    encoder: QrEncoder,
}

impl QrGenerator {
    /// Create a generator writing into `dir`, which must already exist
    pub fn new(dir: impl Into<PathBuf>, scheme: EncodingScheme) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "Output directory {} does not exist",
                dir.display()
            )));
        }

        Ok(Self {
            scheme,
            dir,
            encoder: QrEncoder::new(),
        })
    }

    /// Scheme used for every generated payload
    pub fn scheme(&self) -> EncodingScheme {
        self.scheme
    }

    /// Directory receiving the images
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Generate and save the code for a single friend at instant `at`.
    pub fn create(&self, friend: &Friend, at: DateTime<Local>) -> Result<GeneratedCode> {
        let payload = codec::generate_data(&at, &friend.id, self.scheme.dictionary(), self.scheme)?;
        let data = payload.to_string();
        tracing::debug!(friend = %friend.name, %data, "Rendering QR code");

        let image = self.encoder.render(&data)?;
        let path = self.file_path(friend, &at);
        image.save(&path)?;
        tracing::info!(friend = %friend.name, path = %path.display(), "QR code created");

        Ok(GeneratedCode {
            friend: friend.clone(),
            payload,
            path,
            created_at: at,
        })
    }

    /// Generate codes for every friend in order, reading the clock once per friend.
    ///
    /// Stops at the first failure.
    pub fn create_all(&self, friends: &[Friend], clock: &impl Clock) -> Result<Vec<GeneratedCode>> {
        if friends.is_empty() {
            tracing::warn!("No friends configured; nothing to generate");
        }

        friends
            .iter()
            .map(|friend| self.create(friend, clock.now()))
            .collect()
    }

    fn file_path(&self, friend: &Friend, at: &DateTime<Local>) -> PathBuf {
        self.dir
            .join(format!("{}{}.png", friend.name, at.format(FILE_STAMP_FORMAT)))
    }
}
