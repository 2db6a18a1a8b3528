mod alert;
mod configuration;
mod outcome;

pub use alert::{
    AlertConditionSummary, CheckResult, MatchingType, MessageSummary, Stream, StreamRule,
};
pub use configuration::{Configuration, ConfigurationField, ConfigurationRequest, FieldType};
pub use outcome::{CallbackOutcome, OutcomeStatus};
