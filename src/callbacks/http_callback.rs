//! HTTP alarm callback implementation.
//!
//! POSTs the triggering stream and check result as JSON to a user-configured
//! URL.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, info, warn};

use super::callback::AlarmCallback;
use super::payload::{AlertEvent, JsonEncoder, PayloadEncoder};
use super::transport::{HttpTransport, ReqwestTransport};
use crate::error::{CallbackError, CallbackResult};
use crate::models::{
    CheckResult, Configuration, ConfigurationField, ConfigurationRequest, Stream,
};

/// Configuration key holding the destination URL
pub const CK_URL: &str = "url";

const NAME: &str = "HTTP Alarm Callback";
const URL_LABEL: &str = "URL";
const URL_PLACEHOLDER: &str = "https://example.org/alerts";
const URL_DESCRIPTION: &str = "The URL to POST to when an alert is triggered";

/// Alarm callback that POSTs alerts to an HTTP endpoint
///
/// Transport and encoder are injected so the host can share one client across
/// all callbacks and tests can substitute both.
///
/// # Example
/// ```ignore
/// let mut callback = HttpAlarmCallback::with_shared_client();
/// callback.initialize(Configuration::default().with_string("url", "https://example.org/alerts"))?;
/// callback.deliver(&stream, &check_result).await?;
/// ```
pub struct HttpAlarmCallback {
    transport: Arc<dyn HttpTransport>,
    encoder: Arc<dyn PayloadEncoder>,
    installed: Option<Installed>,
}

/// Configuration accepted by `initialize`, with the URL already parsed
struct Installed {
    configuration: Configuration,
    url: Url,
}

impl HttpAlarmCallback {
    /// Creates an uninitialized callback
    ///
    /// # Arguments
    /// * `transport` - Shared HTTP transport
    /// * `encoder` - Payload encoder
    pub fn new(transport: Arc<dyn HttpTransport>, encoder: Arc<dyn PayloadEncoder>) -> Self {
        Self {
            transport,
            encoder,
            installed: None,
        }
    }

    /// Creates an uninitialized callback on the process-wide client with JSON encoding
    pub fn with_shared_client() -> Self {
        Self::new(
            Arc::new(ReqwestTransport::shared()),
            Arc::new(JsonEncoder::new()),
        )
    }

    pub fn is_initialized(&self) -> bool {
        self.installed.is_some()
    }

    /// Destination URL, once initialized
    pub fn url(&self) -> Option<&Url> {
        self.installed.as_ref().map(|installed| &installed.url)
    }

    /// Extracts and parses the destination URL from a configuration
    ///
    /// Accepts absolute `http` and `https` URLs with a host.
    fn parse_url(config: &Configuration) -> CallbackResult<Url> {
        if config.contains_key(CK_URL) && config.get_string(CK_URL).is_none() {
            return Err(CallbackError::configuration(
                CK_URL,
                "URL parameter must be a string",
            ));
        }

        let raw = config.get_string(CK_URL).unwrap_or_default().trim();
        if raw.is_empty() {
            return Err(CallbackError::configuration(
                CK_URL,
                "URL parameter is missing!",
            ));
        }

        let url = Url::parse(raw)
            .map_err(|e| CallbackError::configuration(CK_URL, format!("Malformed URL: {}", e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CallbackError::configuration(
                CK_URL,
                format!("Malformed URL: unsupported scheme '{}'", url.scheme()),
            ));
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(CallbackError::configuration(
                CK_URL,
                "Malformed URL: missing host",
            ));
        }

        Ok(url)
    }
}

#[async_trait]
impl AlarmCallback for HttpAlarmCallback {
    fn initialize(&mut self, config: Configuration) -> CallbackResult<()> {
        let url = Self::parse_url(&config)?;
        debug!(url = %url, "HTTP alarm callback initialized");
        self.installed = Some(Installed {
            configuration: config,
            url,
        });
        Ok(())
    }

    /// Sends the alert as a single POST
    ///
    /// Any completed response outside 200..=299 becomes
    /// `CallbackError::Delivery`; the transport has released the body by then.
    async fn deliver(&self, stream: &Stream, check_result: &CheckResult) -> CallbackResult<()> {
        let installed = self.installed.as_ref().ok_or_else(|| {
            CallbackError::configuration(CK_URL, "callback has not been initialized")
        })?;

        let body = self
            .encoder
            .encode(&AlertEvent::new(stream, check_result))
            .inspect_err(|e| warn!(stream_id = %stream.id, error = %e, "Failed to encode alert"))?;

        debug!(
            url = %installed.url,
            stream_id = %stream.id,
            bytes = body.len(),
            "Posting alert"
        );

        let response = self
            .transport
            .post(&installed.url, self.encoder.content_type(), body)
            .await
            .inspect_err(|e| {
                warn!(url = %installed.url, stream_id = %stream.id, error = %e, "Alert delivery failed")
            })?;

        if !response.is_success() {
            warn!(
                url = %installed.url,
                stream_id = %stream.id,
                status = response.status(),
                "Alert endpoint rejected delivery"
            );
            return Err(CallbackError::Delivery {
                status: response.status(),
            });
        }

        info!(
            url = %installed.url,
            stream_id = %stream.id,
            status = response.status(),
            "Alert delivered"
        );
        Ok(())
    }

    fn describe_required_configuration(&self) -> ConfigurationRequest {
        let mut request = ConfigurationRequest::new();
        request.add_field(ConfigurationField::text(
            CK_URL,
            URL_LABEL,
            URL_PLACEHOLDER,
            URL_DESCRIPTION,
            true,
        ));
        request
    }

    fn validate_configuration(&self, config: &Configuration) -> CallbackResult<()> {
        Self::parse_url(config).map(|_| ())
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn current_attributes(&self) -> Map<String, JsonValue> {
        self.installed
            .as_ref()
            .map(|installed| installed.configuration.source().clone())
            .unwrap_or_default()
    }
}
