//! Page configuration.
//!
//! Every field has a default matching the stock device firmware, so the page
//! works without any configuration. In the browser, overrides can be stored
//! as JSON in localStorage.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::upload::UploadMode;

/// Log level setting for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Endpoints and behaviour of the update page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Version of the configuration format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Status endpoint polled once on load
    #[serde(default = "default_status_endpoint")]
    pub status_endpoint: String,

    /// Endpoint for raw binary uploads
    #[serde(default = "default_binary_endpoint")]
    pub binary_upload_endpoint: String,

    /// Endpoint for multipart form uploads
    #[serde(default = "default_multipart_endpoint")]
    pub multipart_upload_endpoint: String,

    /// Which upload path the submit button uses
    #[serde(default)]
    pub upload_mode: UploadMode,

    /// Substring the file name must contain
    #[serde(default = "default_image_marker")]
    pub image_marker: String,

    /// Delay before reloading after a successful upload
    #[serde(default = "default_reload_delay_ms")]
    pub reload_delay_ms: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_status_endpoint() -> String {
    constants::STATUS_ENDPOINT.to_string()
}

fn default_binary_endpoint() -> String {
    constants::BINARY_UPLOAD_ENDPOINT.to_string()
}

fn default_multipart_endpoint() -> String {
    constants::MULTIPART_UPLOAD_ENDPOINT.to_string()
}

fn default_image_marker() -> String {
    constants::DEFAULT_IMAGE_MARKER.to_string()
}

fn default_reload_delay_ms() -> u32 {
    constants::DEFAULT_RELOAD_DELAY_MS
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            status_endpoint: default_status_endpoint(),
            binary_upload_endpoint: default_binary_endpoint(),
            multipart_upload_endpoint: default_multipart_endpoint(),
            upload_mode: UploadMode::default(),
            image_marker: default_image_marker(),
            reload_delay_ms: default_reload_delay_ms(),
            log_level: LogLevel::default(),
        }
    }
}

impl PageConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Endpoint used by the configured upload mode.
    pub fn upload_endpoint(&self) -> &str {
        match self.upload_mode {
            UploadMode::Binary => &self.binary_upload_endpoint,
            UploadMode::Multipart => &self.multipart_upload_endpoint,
        }
    }

    /// LocalStorage key for config overrides.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "iap-web-config";

    /// Load overrides from localStorage, falling back to defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default() -> Self {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return Self::default();
        };

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("⚙️ Loaded page configuration from localStorage");
                    config
                }
                Err(e) => {
                    log::warn!("⚙️ Ignoring stored configuration: {}", e);
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("⚙️ Failed to read from localStorage: {:?}", e);
                Self::default()
            }
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_device_firmware() {
        let config = PageConfig::default();
        assert_eq!(config.status_endpoint, "/data.json");
        assert_eq!(config.upload_endpoint(), "/upload/binary");
        assert_eq!(config.image_marker, ".img");
        assert_eq!(config.reload_delay_ms, 5000);
        assert_eq!(config.upload_mode, UploadMode::Binary);
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            PageConfig::from_json(r##"{"upload_mode":"multipart","log_level":"debug"}"##).unwrap();
        assert_eq!(config.upload_mode, UploadMode::Multipart);
        assert_eq!(config.upload_endpoint(), "/upload");
        assert_eq!(config.log_level.to_level(), log::Level::Debug);
        assert_eq!(config.reload_delay_ms, 5000);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = PageConfig::default();
        config.reload_delay_ms = 2000;
        let json = config.to_json().unwrap();
        assert_eq!(PageConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_version_too_new() {
        let json = format!(r##"{{"version":{}}}"##, CONFIG_VERSION + 1);
        assert!(matches!(
            PageConfig::from_json(&json),
            Err(ConfigError::VersionTooNew { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            PageConfig::from_json("{"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
