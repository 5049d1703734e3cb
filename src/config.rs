//! Startup configuration: where the classifier service lives.
//!
//! The API base URL is resolved once at launch. `SENTISCOPE_API_URL` wins over
//! `api_base_url` in `<app root>/config.toml`; both default to empty, which
//! means "same origin".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app_dirs;
use crate::classifier::api::PREDICT_PATH;

/// Settings file name inside the app root.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable carrying the API base URL.
pub const API_URL_ENV: &str = "SENTISCOPE_API_URL";
/// Origin used when the base URL is empty.
pub const SAME_ORIGIN: &str = "http://127.0.0.1:8000";

/// Settings persisted in `config.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the classifier service; empty means same origin.
    pub api_base_url: String,
}

/// Fully resolved configuration handed to the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiEndpoint,
}

/// Validated classifier base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoint {
    base: String,
}

impl ApiEndpoint {
    /// Validate a configured base URL. Empty (or whitespace) is accepted as same origin.
    pub fn new(base: &str) -> Result<Self, ConfigError> {
        let trimmed = base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::same_origin());
        }
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                url: trimmed.to_string(),
            });
        }
        Ok(Self {
            base: trimmed.to_string(),
        })
    }

    /// Endpoint that resolves against [`SAME_ORIGIN`].
    pub fn same_origin() -> Self {
        Self {
            base: String::new(),
        }
    }

    /// Absolute URL of the predict route.
    pub fn predict_url(&self) -> String {
        let origin = if self.base.is_empty() {
            SAME_ORIGIN
        } else {
            self.base.as_str()
        };
        format!("{origin}{PREDICT_PATH}")
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self::same_origin()
    }
}

/// Errors that may occur while resolving startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl { url: String, source: url::ParseError },
    #[error("API base URL {url:?} must use http or https")]
    UnsupportedScheme { url: String },
    #[error("No suitable config directory found: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
}

/// Resolve the configuration file path inside the app root.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings and the environment override, falling back to defaults.
///
/// When `SENTISCOPE_API_URL` is set the config file is not consulted. An
/// unusable app directory degrades to default settings.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    if let Ok(base) = std::env::var(API_URL_ENV) {
        return resolve(AppSettings::default(), Some(base));
    }
    let settings = match config_path() {
        Ok(path) => load_settings_from(&path)?,
        Err(err) => {
            tracing::warn!("Config file unavailable, using defaults: {err}");
            AppSettings::default()
        }
    };
    resolve(settings, None)
}

/// Combine file settings with an optional environment value.
pub fn resolve(settings: AppSettings, env_base_url: Option<String>) -> Result<AppConfig, ConfigError> {
    let base = env_base_url.unwrap_or(settings.api_base_url);
    let api = ApiEndpoint::new(&base)?;
    tracing::info!("Classifier endpoint: {}", api.predict_url());
    Ok(AppConfig { api })
}

fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
