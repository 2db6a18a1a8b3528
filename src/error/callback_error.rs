use std::fmt;

use thiserror::Error;

/// Classification of transport-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection could not be established (refused, DNS, TLS handshake)
    Connect,
    /// The shared client gave up waiting for the endpoint
    Timeout,
    /// The destination could not be turned into a request
    InvalidDestination,
    /// Any other I/O or protocol failure
    Other,
}

impl TransportErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::InvalidDestination => "invalid destination",
            TransportErrorKind::Other => "other",
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while configuring an alarm callback or delivering an alert.
///
/// `Configuration` is a setup-time failure and blocks activation of the
/// callback. The remaining variants are delivery-time failures and are handed
/// back to the caller untouched; nothing is retried internally.
#[derive(Error, Debug)]
pub enum CallbackError {
    /// Missing or malformed configuration value
    #[error("Configuration error for {key}: {reason}")]
    Configuration { key: String, reason: String },

    /// The alert could not be encoded into a request body
    #[error("Unable to serialize alarm: {source}")]
    Serialization {
        #[source]
        source: anyhow::Error,
    },

    /// The request never produced a response
    ///
    /// The message renders the whole cause chain, down to the OS error.
    #[error("HTTP transport failed ({kind}): {source:#}")]
    Transport {
        kind: TransportErrorKind,
        #[source]
        source: anyhow::Error,
    },

    /// The endpoint answered with a status outside 200..=299
    #[error("Expected successful HTTP response [2xx] but got [{status}].")]
    Delivery { status: u16 },
}

impl CallbackError {
    pub fn configuration(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn serialization(source: impl Into<anyhow::Error>) -> Self {
        Self::Serialization {
            source: source.into(),
        }
    }

    pub fn transport(kind: TransportErrorKind, source: impl Into<anyhow::Error>) -> Self {
        Self::Transport {
            kind,
            source: source.into(),
        }
    }

    /// True for failures that happen while validating or initializing.
    pub fn is_configuration(&self) -> bool {
        matches!(self, CallbackError::Configuration { .. })
    }

    /// HTTP status carried by a `Delivery` failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            CallbackError::Delivery { status } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Result with CallbackError to simplify function signatures
pub type CallbackResult<T> = Result<T, CallbackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_message_carries_status() {
        let err = CallbackError::Delivery { status: 503 };
        assert_eq!(
            err.to_string(),
            "Expected successful HTTP response [2xx] but got [503]."
        );
        assert_eq!(err.status(), Some(503));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_configuration_helper() {
        let err = CallbackError::configuration("url", "URL parameter is missing!");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Configuration error for url: URL parameter is missing!"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_transport_keeps_cause() {
        let err = CallbackError::transport(
            TransportErrorKind::Connect,
            anyhow::anyhow!("connection refused"),
        );
        assert_eq!(
            err.to_string(),
            "HTTP transport failed (connect): connection refused"
        );
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_transport_message_includes_nested_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
        let cause = anyhow::Error::new(io).context("error sending request for url");
        let err = CallbackError::transport(TransportErrorKind::Connect, cause);
        assert_eq!(
            err.to_string(),
            "HTTP transport failed (connect): error sending request for url: Connection refused"
        );
    }
}
