//! Error types for the slang delegate.

use thiserror::Error;

/// Environment variable holding the delegate credential.
pub const API_KEY_VAR: &str = "HACKCLUB_API_KEY";

/// Failures of the remote slang delegate.
///
/// Both kinds are recovered at the request boundary and shown to the user;
/// neither is retried.
#[derive(Debug, Error)]
pub enum DelegateError {
    /// No credential was configured.
    #[error("Missing {variable} environment variable.")]
    Configuration { variable: &'static str },

    /// Transport failure, non-success status, or an unusable response body.
    #[error("Slang delegate request failed: {message}")]
    Request { message: String },
}

impl DelegateError {
    /// Configuration error for the missing API key.
    pub fn missing_api_key() -> Self {
        Self::Configuration {
            variable: API_KEY_VAR,
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for DelegateError {
    fn from(err: reqwest::Error) -> Self {
        Self::request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        assert_eq!(
            DelegateError::missing_api_key().to_string(),
            "Missing HACKCLUB_API_KEY environment variable."
        );
    }

    #[test]
    fn test_request_message() {
        let err = DelegateError::request("status 502");
        assert!(err.to_string().contains("status 502"));
    }
}
