//! Record of a single callback invocation, as a host would store it.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::CallbackResult;

/// Status of a callback invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Error,
}

/// Serializable outcome of one delivery attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackOutcome {
    pub callback: String,
    pub status: OutcomeStatus,
    /// Human-readable failure message
    pub error: Option<String>,
    /// HTTP status for non-2xx responses
    pub status_code: Option<u16>,
    pub attempted_at: Timestamp,
    pub duration_ms: u64,
}

impl CallbackOutcome {
    /// Builds the record from the result of a delivery attempt
    pub fn from_result(
        callback: impl Into<String>,
        result: &CallbackResult<()>,
        attempted_at: Timestamp,
        duration_ms: u64,
    ) -> Self {
        let (status, error, status_code) = match result {
            Ok(()) => (OutcomeStatus::Success, None, None),
            Err(e) => (OutcomeStatus::Error, Some(e.to_string()), e.status()),
        };

        Self {
            callback: callback.into(),
            status,
            error,
            status_code,
            attempted_at,
            duration_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}
