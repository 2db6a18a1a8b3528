//! Sample alert used by `alarmctl test`.

use jiff::Timestamp;
use serde_json::{Map, Value as JsonValue, json};

use crate::models::{AlertConditionSummary, CheckResult, MatchingType, MessageSummary, Stream};

const SAMPLE_ID: &str = "000000000000000000000001";
const SAMPLE_USER: &str = "alarmctl";

/// Stream standing in for a real monitored stream
pub fn sample_stream(title: &str, now: Timestamp) -> Stream {
    Stream {
        id: SAMPLE_ID.to_string(),
        title: title.to_string(),
        description: Some("Dummy stream used to test alarm callbacks".to_string()),
        disabled: false,
        matching_type: MatchingType::And,
        rules: Vec::new(),
        created_at: now,
        creator_user_id: SAMPLE_USER.to_string(),
        remove_matches_from_default_stream: false,
        index_set_id: None,
    }
}

/// Triggered check result with one matching message
pub fn sample_check_result(now: Timestamp) -> CheckResult {
    let condition = AlertConditionSummary {
        id: SAMPLE_ID.to_string(),
        condition_type: "dummy".to_string(),
        title: Some("Dummy alert condition".to_string()),
        created_at: now,
        creator_user_id: SAMPLE_USER.to_string(),
        grace: 0,
        backlog: 1,
        repeat_notifications: false,
        parameters: Map::new(),
    };

    let message = MessageSummary {
        index: "test_index".to_string(),
        message: object(json!({
            "_id": SAMPLE_ID,
            "message": "Dummy message for testing the alarm callback",
            "source": SAMPLE_USER,
            "timestamp": now.to_string(),
        })),
    };

    CheckResult::triggered(
        condition,
        "Dummy alert to test notifications",
        now,
        vec![message],
    )
}

fn object(value: JsonValue) -> Map<String, JsonValue> {
    match value {
        JsonValue::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_alert_is_triggered() {
        let now: Timestamp = "2024-03-01T10:00:00Z".parse().unwrap();
        let stream = sample_stream("checkout errors", now);
        let result = sample_check_result(now);

        assert_eq!(stream.title, "checkout errors");
        assert!(result.triggered);
        assert_eq!(result.triggered_at, Some(now));
        assert_eq!(result.matching_messages.len(), 1);
        assert_eq!(result.matching_messages[0].id(), Some(SAMPLE_ID));
    }
}
