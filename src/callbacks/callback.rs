//! Core alarm callback trait.
//!
//! An alarm callback is the host-facing contract of a notification sink: the
//! host collects configuration through `describe_required_configuration`,
//! validates and installs it, then calls `deliver` whenever a condition fires.

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};

use crate::error::CallbackResult;
use crate::models::{CheckResult, Configuration, ConfigurationRequest, Stream};

/// Trait for alarm callbacks (HTTP, email, chat, ...)
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// Implementations must be Send + Sync: after `initialize` the host may call
/// `deliver` concurrently from several tasks.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct LogCallback {
///     configuration: Configuration,
/// }
///
/// #[async_trait]
/// impl AlarmCallback for LogCallback {
///     async fn deliver(&self, stream: &Stream, result: &CheckResult) -> CallbackResult<()> {
///         tracing::warn!(stream = %stream.title, "{}", result.result_description);
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "Log Alarm Callback"
///     }
///
///     // ...
/// }
/// ```
#[async_trait]
pub trait AlarmCallback: Send + Sync {
    /// Installs the configuration for the lifetime of the callback
    ///
    /// Validates first; on error the callback stays uninitialized.
    /// No network access.
    fn initialize(&mut self, config: Configuration) -> CallbackResult<()>;

    /// Delivers one alert
    ///
    /// Performs at most one attempt. Retrying, logging and escalating
    /// repeated failures is up to the caller.
    async fn deliver(&self, stream: &Stream, check_result: &CheckResult) -> CallbackResult<()>;

    /// Fields the host must collect from the user
    fn describe_required_configuration(&self) -> ConfigurationRequest;

    /// Checks a candidate configuration without installing it
    fn validate_configuration(&self, config: &Configuration) -> CallbackResult<()>;

    /// Human-readable name of the callback type
    fn name(&self) -> &'static str;

    /// Installed configuration for display and audit; empty before `initialize`
    fn current_attributes(&self) -> Map<String, JsonValue>;
}
