//! Error types for the Placepick client.

use thiserror::Error;

/// A shared error type for the Placepick client crates.
///
/// Transport failures of every flavor (unreachable host, non-2xx status,
/// malformed body) end up here. The application layer folds all of them into
/// a single "request failed" notice; the variants exist for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacepickError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The server answered with a non-success HTTP status
    #[error("Unexpected status {status} from {path}")]
    Status { status: u16, path: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// The server understood the request and answered `success: false`
    #[error("Request rejected by server: {0}")]
    Rejected(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Locally supplied data broke an invariant (for example a catalog with
    /// repeated names); never reaches the network
    #[error("Validation error: {0}")]
    Validation(String),
}

impl PlacepickError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a Status error
    pub fn status(status: u16, path: impl Into<String>) -> Self {
        Self::Status {
            status,
            path: path.into(),
        }
    }

    /// Creates a JSON Serialization error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: message.into(),
        }
    }

    /// Creates a Rejected error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error came from talking to the server.
    ///
    /// Returns true for transport, status, malformed-body and rejection
    /// errors. These are the failures surfaced to the user as one generic
    /// notice.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::Status { .. }
                | Self::Serialization { .. }
                | Self::Rejected(_)
        )
    }

    /// Check if this is a Rejected error
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for PlacepickError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

impl From<toml::de::Error> for PlacepickError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PlacepickError>`.
pub type Result<T> = std::result::Result<T, PlacepickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failures_are_grouped() {
        assert!(PlacepickError::transport("connection refused").is_request_failure());
        assert!(PlacepickError::status(502, "/api/users").is_request_failure());
        assert!(PlacepickError::json("expected value").is_request_failure());
        assert!(PlacepickError::rejected("success=false").is_request_failure());

        assert!(!PlacepickError::validation("duplicate catalog item").is_request_failure());
        assert!(!PlacepickError::config("no base url").is_request_failure());
    }

    #[test]
    fn test_serde_json_error_converts_to_serialization() {
        let err: PlacepickError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            PlacepickError::Serialization { ref format, .. } if format == "JSON"
        ));
    }

    #[test]
    fn test_status_display() {
        let err = PlacepickError::status(404, "/api/users");
        assert_eq!(err.to_string(), "Unexpected status 404 from /api/users");
    }
}
