mod callback_error;

pub use callback_error::{CallbackError, CallbackResult, TransportErrorKind};
