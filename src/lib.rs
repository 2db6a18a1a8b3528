//! HTTP Alarm Callback
//!
//! Notification sink that POSTs triggered alerts as JSON to a configured
//! HTTP endpoint.

pub mod callbacks;
pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;

pub use callbacks::{AlarmCallback, HttpAlarmCallback};
pub use error::{CallbackError, CallbackResult};

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
