//! Alarm callbacks with pluggable transport and encoding.
//!
//! The core trait `AlarmCallback` is what the host drives; `HttpAlarmCallback`
//! is the HTTP implementation. Transport and payload encoding are separate
//! traits so the host can inject its own shared client and serializer.

mod callback;
mod http_callback;
mod payload;
mod transport;

pub use callback::AlarmCallback;
pub use http_callback::{CK_URL, HttpAlarmCallback};
pub use payload::{AlertEvent, JsonEncoder, PayloadEncoder};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
