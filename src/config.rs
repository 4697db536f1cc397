//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "https://restful-api-e-rapor-production.up.railway.app/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid ERAPOR_API_TIMEOUT_SECS: {0:?}")]
    InvalidTimeout(String),
    #[error("ERAPOR_API_URL must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the E-Rapor REST API, without a trailing slash.
    pub api_url: String,
    pub api_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ERAPOR_API_URL`: default production E-Rapor API
    /// - `ERAPOR_API_TIMEOUT_SECS`: default 15
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok();
        let api_url = std::env::var("ERAPOR_API_URL").ok();
        let timeout = std::env::var("ERAPOR_API_TIMEOUT_SECS").ok();
        Self::from_vars(port.as_deref(), api_url.as_deref(), timeout.as_deref())
    }

    /// Same as [`ServerConfig::from_env`] over explicit raw values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed value.
    pub fn from_vars(port: Option<&str>, api_url: Option<&str>, timeout: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(port)?,
            api_url: parse_api_url(api_url)?,
            api_timeout_secs: parse_timeout(timeout)?,
        })
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = present(raw) else {
        return Ok(DEFAULT_PORT);
    };
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<u64, ConfigError> {
    let Some(value) = present(raw) else {
        return Ok(DEFAULT_API_TIMEOUT_SECS);
    };
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout(value.to_owned())),
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = present(raw).unwrap_or(DEFAULT_API_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
