//! Request loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::request::RequestConfig;

/// Load a request envelope from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the request
/// fails validation.
///
/// # Example
///
/// ```rust,ignore
/// use motion_profiles::load_request;
///
/// let request = load_request("trajectory.toml")?;
/// ```
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<RequestConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_request(&content)
}

/// Parse a request envelope from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_request(content: &str) -> Result<RequestConfig> {
    let config: RequestConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the request
    super::validation::validate_request(&config)?;

    Ok(config)
}
