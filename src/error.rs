//! Error types and handling for `Skyglance`

use thiserror::Error;

/// Shown when the submitted location is blank after trimming
pub const MSG_EMPTY_LOCATION: &str = "Please enter a location";
/// Shown for any network, status or decoding failure of the weather API
pub const MSG_FETCH_FAILED: &str =
    "Unable to fetch weather data. Please check the location name and try again.";
/// Shown when the payload decodes but lacks a required section
pub const MSG_INVALID_DATA: &str = "Invalid weather data received";
/// Plain-text body of the 500 response when the page cannot be rendered
pub const MSG_RENDER_FAILED: &str = "Error rendering template";

/// Main error type for the `Skyglance` application
#[derive(Error, Debug)]
pub enum SkyglanceError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The location form field was blank
    #[error("Invalid input: location is empty")]
    EmptyLocation,

    /// Network failure, timeout or unexpected status from the weather API
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Weather API body was not the expected JSON
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Well-formed payload missing a required section
    #[error("Invalid weather data: {message}")]
    Validation { message: String },

    /// Template compilation or execution failed
    #[error("Render error: {message}")]
    Render { message: String },
}

impl SkyglanceError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new fetch error
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Get the message shown to the user. Upstream detail never leaks here.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkyglanceError::EmptyLocation => MSG_EMPTY_LOCATION.to_string(),
            SkyglanceError::Fetch { .. } | SkyglanceError::Decode { .. } => {
                MSG_FETCH_FAILED.to_string()
            }
            SkyglanceError::Validation { .. } => MSG_INVALID_DATA.to_string(),
            SkyglanceError::Render { .. } => MSG_RENDER_FAILED.to_string(),
            SkyglanceError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SkyglanceError::config("bad port");
        assert!(matches!(config_err, SkyglanceError::Config { .. }));

        let fetch_err = SkyglanceError::fetch("connection refused");
        assert!(matches!(fetch_err, SkyglanceError::Fetch { .. }));

        let validation_err = SkyglanceError::validation("missing forecast data");
        assert!(matches!(validation_err, SkyglanceError::Validation { .. }));
    }

    #[test]
    fn test_user_messages_hide_upstream_detail() {
        let fetch_err = SkyglanceError::fetch("API returned status 503");
        assert_eq!(fetch_err.user_message(), MSG_FETCH_FAILED);
        assert!(!fetch_err.user_message().contains("503"));

        let decode_err = SkyglanceError::decode("expected value at line 1 column 1");
        assert_eq!(decode_err.user_message(), MSG_FETCH_FAILED);

        assert_eq!(SkyglanceError::EmptyLocation.user_message(), MSG_EMPTY_LOCATION);
        assert_eq!(
            SkyglanceError::validation("missing location data").user_message(),
            MSG_INVALID_DATA
        );
        assert_eq!(SkyglanceError::render("boom").user_message(), MSG_RENDER_FAILED);
    }

    #[test]
    fn test_display_keeps_detail_for_logs() {
        let err = SkyglanceError::validation("missing current condition data");
        assert_eq!(
            err.to_string(),
            "Invalid weather data: missing current condition data"
        );
    }
}
