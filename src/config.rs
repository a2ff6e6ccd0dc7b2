//! qrstamp runtime configuration handling

use crate::codec::EncodingScheme;
use crate::error::{Error, Result};
use crate::generate::Friend;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QrstampConfig {
    /// Friends to generate codes for, in order
    pub friends: Vec<Friend>,
    /// Where and how codes are generated
    pub output: OutputOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl QrstampConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No qrstamp.toml / qrstamp.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["qrstamp.toml", "qrstamp.yaml", "qrstamp.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("qrstamp");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) -> Result<()> {
        self.output.apply_env_overrides()?;
        self.logging.apply_env_overrides();
        Ok(())
    }

    /// Friend identifiers in registry order
    pub fn friend_ids(&self) -> Vec<&str> {
        self.friends.iter().map(|f| f.id.as_str()).collect()
    }
}

/// Code generation defaults, overridable from the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Directory receiving generated PNG files; must already exist
    pub dir: PathBuf,
    /// Protocol version used when none is given on the command line
    pub version: EncodingScheme,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("img/"),
            version: EncodingScheme::V4,
        }
    }
}

impl OutputOptions {
    pub(crate) fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(dir) = env::var("QRSTAMP_OUTPUT_DIR") {
            self.dir = PathBuf::from(dir);
        }
        if let Ok(version) = env::var("QRSTAMP_VERSION") {
            self.version = version.parse()?;
        }
        Ok(())
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRSTAMP_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in terminal logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRSTAMP_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("QRSTAMP_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("QRSTAMP_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("QRSTAMP_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::parse(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = QrstampConfig::default();
        assert!(config.friends.is_empty());
        assert_eq!(config.output.dir, PathBuf::from("img/"));
        assert_eq!(config.output.version, EncodingScheme::V4);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[[friends]]
id = "abcd1234"
name = "Alice"

[[friends]]
id = "edfg5678"
name = "Bob"

[output]
dir = "codes"
version = 5
"#
        )
        .unwrap();

        let config = QrstampConfig::from_file(file.path()).unwrap();
        assert_eq!(config.friend_ids(), vec!["abcd1234", "edfg5678"]);
        assert_eq!(config.friends[1].name, "Bob");
        assert_eq!(config.output.dir, PathBuf::from("codes"));
        assert_eq!(config.output.version, EncodingScheme::V5);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "friends:\n  - id: abcd1234\n    name: Alice\nlogging:\n  level: debug\n  rotation: daily\n"
        )
        .unwrap();

        let config = QrstampConfig::from_file(file.path()).unwrap();
        assert_eq!(config.friends.len(), 1);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.rotation, Some(LogRotation::Daily));
        assert_eq!(config.output.version, EncodingScheme::V4);
    }

    #[test]
    fn test_unsupported_version_in_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nversion = 6").unwrap();

        assert!(matches!(
            QrstampConfig::from_file(file.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            QrstampConfig::from_file(file.path()),
            Err(Error::Config(_))
        ));
    }
}
