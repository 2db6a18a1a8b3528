//! Alert payload and its encoders.

use serde::Serialize;

use crate::error::{CallbackError, CallbackResult};
use crate::models::{CheckResult, Stream};

/// Event handed to an encoder: the stream an alert belongs to and the result
/// of the condition check that triggered it
///
/// Serializes as `{"stream": ..., "check_result": ...}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AlertEvent<'a> {
    pub stream: &'a Stream,
    pub check_result: &'a CheckResult,
}

impl<'a> AlertEvent<'a> {
    pub fn new(stream: &'a Stream, check_result: &'a CheckResult) -> Self {
        Self {
            stream,
            check_result,
        }
    }
}

/// Turns an alert event into a request body
pub trait PayloadEncoder: Send + Sync {
    /// Value for the `Content-Type` header
    fn content_type(&self) -> &'static str;

    fn encode(&self, event: &AlertEvent<'_>) -> CallbackResult<Vec<u8>>;
}

/// JSON encoder backed by serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder {
    pretty: bool,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output, mostly useful when a human reads the receiving end
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl PayloadEncoder for JsonEncoder {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, event: &AlertEvent<'_>) -> CallbackResult<Vec<u8>> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(event)
        } else {
            serde_json::to_vec(event)
        };
        encoded.map_err(CallbackError::serialization)
    }
}
