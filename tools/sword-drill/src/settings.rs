use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Translation identifier understood by bible-api.com.
pub const DEFAULT_TRANSLATION: &str = "kjv";
pub const DEFAULT_API_URL: &str = "https://bible-api.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("translation code must be non-empty ASCII letters or digits, got {0:?}")]
    InvalidTranslation(String),
    #[error("invalid verse service URL: {0}")]
    InvalidApiUrl(#[from] url::ParseError),
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

/// Everything the host needs besides the (fixed) parsing tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub translation: String,
    pub api_url: Url,
    pub timeout: Duration,
}

impl Settings {
    pub fn new(translation: &str, api_url: &str, timeout_secs: u64) -> Result<Self, SettingsError> {
        let translation = translation.trim().to_ascii_lowercase();
        if translation.is_empty() || !translation.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(SettingsError::InvalidTranslation(translation));
        }
        if timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout);
        }

        Ok(Self {
            translation,
            api_url: Url::parse(api_url)?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translation: DEFAULT_TRANSLATION.to_string(),
            api_url: Url::parse(DEFAULT_API_URL).expect("default URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
