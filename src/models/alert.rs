//! Alert models passed to alarm callbacks.
//!
//! These are read-only snapshots built by the host for a single invocation.
//! Their serialized form is the wire format of the HTTP callback payload.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

// ============================================================================
// Stream
// ============================================================================

/// How the rules of a stream are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchingType {
    #[default]
    And,
    Or,
}

/// Rule routing messages into a stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRule {
    pub id: String,
    pub field: String,
    #[serde(rename = "type")]
    pub rule_type: i32,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// The monitored source entity an alert belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub matching_type: MatchingType,
    #[serde(default)]
    pub rules: Vec<StreamRule>,
    pub created_at: Timestamp,
    pub creator_user_id: String,
    #[serde(default)]
    pub remove_matches_from_default_stream: bool,
    #[serde(default)]
    pub index_set_id: Option<String>,
}

// ============================================================================
// Check result
// ============================================================================

/// Condition metadata attached to a check result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConditionSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub condition_type: String,
    #[serde(default)]
    pub title: Option<String>,
    pub created_at: Timestamp,
    pub creator_user_id: String,
    /// Minutes to wait before the condition may fire again
    #[serde(default)]
    pub grace: u32,
    /// Number of matching messages attached to a result
    #[serde(default)]
    pub backlog: u32,
    #[serde(default)]
    pub repeat_notifications: bool,
    /// Condition-type specific parameters, passed through verbatim
    #[serde(default)]
    pub parameters: Map<String, JsonValue>,
}

/// A message that matched the triggered condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSummary {
    pub index: String,
    pub message: Map<String, JsonValue>,
}

impl MessageSummary {
    pub fn id(&self) -> Option<&str> {
        self.message.get("_id").and_then(JsonValue::as_str)
    }
}

/// Outcome of evaluating an alert condition against recent data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub triggered: bool,
    pub result_description: String,
    pub triggered_condition: Option<AlertConditionSummary>,
    #[serde(default)]
    pub triggered_at: Option<Timestamp>,
    #[serde(default)]
    pub matching_messages: Vec<MessageSummary>,
}

impl CheckResult {
    /// Result of a condition that fired at `triggered_at`
    pub fn triggered(
        condition: AlertConditionSummary,
        result_description: impl Into<String>,
        triggered_at: Timestamp,
        matching_messages: Vec<MessageSummary>,
    ) -> Self {
        Self {
            triggered: true,
            result_description: result_description.into(),
            triggered_condition: Some(condition),
            triggered_at: Some(triggered_at),
            matching_messages,
        }
    }

    /// Result of a condition that did not fire
    pub fn not_triggered(result_description: impl Into<String>) -> Self {
        Self {
            triggered: false,
            result_description: result_description.into(),
            triggered_condition: None,
            triggered_at: None,
            matching_messages: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_condition() -> AlertConditionSummary {
        AlertConditionSummary {
            id: "cond-1".to_string(),
            condition_type: "message_count".to_string(),
            title: Some("Too many errors".to_string()),
            created_at: "2024-03-01T10:00:00Z".parse().unwrap(),
            creator_user_id: "admin".to_string(),
            grace: 5,
            backlog: 1,
            repeat_notifications: false,
            parameters: json!({"threshold": 10, "time": 5}).as_object().unwrap().clone(),
        }
    }

    #[test]
    fn test_stream_wire_names() {
        let stream = Stream {
            id: "5400deadbeef".to_string(),
            title: "Errors".to_string(),
            description: None,
            disabled: false,
            matching_type: MatchingType::Or,
            rules: vec![StreamRule {
                id: "rule-1".to_string(),
                field: "level".to_string(),
                rule_type: 1,
                value: Some("3".to_string()),
                inverted: false,
                description: None,
            }],
            created_at: "2024-03-01T09:00:00Z".parse().unwrap(),
            creator_user_id: "admin".to_string(),
            remove_matches_from_default_stream: false,
            index_set_id: None,
        };

        let value = serde_json::to_value(&stream).unwrap();
        assert_eq!(value["matching_type"], "OR");
        assert_eq!(value["rules"][0]["type"], 1);
        assert_eq!(value["created_at"], "2024-03-01T09:00:00Z");
    }

    #[test]
    fn test_check_result_triggered() {
        let at: Timestamp = "2024-03-01T10:05:00Z".parse().unwrap();
        let result = CheckResult::triggered(sample_condition(), "10 messages", at, Vec::new());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["triggered"], true);
        assert_eq!(value["triggered_condition"]["type"], "message_count");
        assert_eq!(value["triggered_condition"]["parameters"]["threshold"], 10);
        assert_eq!(value["triggered_at"], "2024-03-01T10:05:00Z");
    }

    #[test]
    fn test_check_result_not_triggered() {
        let result = CheckResult::not_triggered("nothing to see");
        assert!(!result.triggered);
        assert!(result.triggered_condition.is_none());
        assert!(result.triggered_at.is_none());
    }

    #[test]
    fn test_message_summary_id() {
        let summary = MessageSummary {
            index: "graylog_0".to_string(),
            message: json!({"_id": "abc", "message": "boom"})
                .as_object()
                .unwrap()
                .clone(),
        };
        assert_eq!(summary.id(), Some("abc"));
    }
}
