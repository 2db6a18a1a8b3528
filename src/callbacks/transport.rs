//! HTTP transport abstraction used by the HTTP alarm callback.
//!
//! The host owns the client; callbacks only see this trait. Implementations
//! must be safe to share between concurrent deliveries.

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

use crate::config::HttpClientSettings;
use crate::error::{CallbackError, CallbackResult, TransportErrorKind};
use crate::external::{HTTP_CLIENT, build_client};

/// Response bytes read back before the connection is given up
const MAX_DRAINED_BODY_BYTES: usize = 64 * 1024;

/// Completed HTTP exchange, reduced to what a callback needs
///
/// The response body has already been released when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportResponse {
    status: u16,
}

impl TransportResponse {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// True for 200..=299
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Sends a single request and reports the outcome
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POSTs `body` to `url` with the given content type
    ///
    /// # Returns
    /// The response status on any completed exchange, including non-2xx.
    /// `CallbackError::Transport` when no response was received.
    async fn post(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> CallbackResult<TransportResponse>;
}

/// `HttpTransport` backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Transport on top of the process-wide `HTTP_CLIENT`
    pub fn shared() -> Self {
        Self::new(HTTP_CLIENT.clone())
    }

    /// Transport with a dedicated client built from settings
    pub fn from_settings(settings: &HttpClientSettings) -> CallbackResult<Self> {
        build_client(settings)
            .map(Self::new)
            .map_err(|e| CallbackError::transport(TransportErrorKind::Other, e))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> CallbackResult<TransportResponse> {
        let mut response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| CallbackError::transport(classify(&e), e))?;

        let status = response.status().as_u16();

        // Drain small bodies so the connection goes back to the pool; larger
        // ones are dropped with the response. The status is already known, so
        // a read failure does not change the outcome.
        let mut drained = 0;
        while drained < MAX_DRAINED_BODY_BYTES {
            match response.chunk().await {
                Ok(Some(chunk)) => drained += chunk.len(),
                Ok(None) => break,
                Err(e) => {
                    tracing::debug!(url = %url, status, error = %e, "Failed to read response body");
                    break;
                }
            }
        }

        Ok(TransportResponse::new(status))
    }
}

fn classify(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_builder() {
        TransportErrorKind::InvalidDestination
    } else {
        TransportErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_success_boundaries() {
        assert!(!TransportResponse::new(199).is_success());
        assert!(TransportResponse::new(200).is_success());
        assert!(TransportResponse::new(204).is_success());
        assert!(TransportResponse::new(299).is_success());
        assert!(!TransportResponse::new(300).is_success());
        assert!(!TransportResponse::new(500).is_success());
    }

    #[test]
    fn test_from_settings() {
        assert!(ReqwestTransport::from_settings(&HttpClientSettings::default()).is_ok());
    }

    fn transport() -> ReqwestTransport {
        ReqwestTransport::from_settings(&HttpClientSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn test_connection_refused_is_connect_error() {
        // Port 1 is reserved and nothing listens on it
        let url = Url::parse("http://127.0.0.1:1/alerts").unwrap();
        let err = transport()
            .post(&url, "application/json", b"{}".to_vec())
            .await
            .unwrap_err();

        let message = err.to_string();
        match err {
            CallbackError::Transport { kind, .. } => assert_eq!(kind, TransportErrorKind::Connect),
            other => panic!("expected transport error, got {other:?}"),
        }
        assert!(
            message.to_lowercase().contains("refused"),
            "cause missing from {message:?}"
        );
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_invalid_destination() {
        let url = Url::parse("ftp://example.org/alerts").unwrap();
        let err = transport()
            .post(&url, "application/json", b"{}".to_vec())
            .await
            .unwrap_err();

        match err {
            CallbackError::Transport { kind, .. } => {
                assert_eq!(kind, TransportErrorKind::InvalidDestination)
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn property_success_is_exactly_2xx(status in 100u16..600) {
            let response = TransportResponse::new(status);
            prop_assert_eq!(response.is_success(), status / 100 == 2);
        }
    }
}
