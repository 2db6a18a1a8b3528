//! Host-facing configuration models.
//!
//! The host persists callback configuration as an opaque key/value document
//! and renders a form from the `ConfigurationRequest` a callback publishes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

// ============================================================================
// Configuration
// ============================================================================

/// Key/value configuration handed to a callback by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    source: Map<String, JsonValue>,
}

impl Configuration {
    /// Creates a configuration from a raw key/value map
    pub fn new(source: Map<String, JsonValue>) -> Self {
        Self { source }
    }

    /// Parses a configuration from a JSON document
    ///
    /// # Returns
    /// Result containing the configuration or an error if the document is not an object
    pub fn from_json(value: &JsonValue) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }

    /// Adds or replaces a string attribute, builder style
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.source
            .insert(key.into(), JsonValue::String(value.into()));
        self
    }

    /// Returns the string value for `key`, or `None` when it is absent or not a string
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.source.get(key).and_then(JsonValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.source.contains_key(key)
    }

    /// Raw attributes as stored by the host
    pub fn source(&self) -> &Map<String, JsonValue> {
        &self.source
    }
}

impl From<Map<String, JsonValue>> for Configuration {
    fn from(source: Map<String, JsonValue>) -> Self {
        Self::new(source)
    }
}

// ============================================================================
// Requested configuration (form description)
// ============================================================================

/// Widget the host should render for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Boolean,
}

/// A single configuration field the host must collect from the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationField {
    pub key: String,
    pub label: String,
    pub field_type: FieldType,
    /// Placeholder shown to the user, never applied as a value
    pub default_hint: String,
    pub description: String,
    pub required: bool,
}

impl ConfigurationField {
    /// Creates a free-text field
    pub fn text(
        key: impl Into<String>,
        label: impl Into<String>,
        default_hint: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type: FieldType::Text,
            default_hint: default_hint.into(),
            description: description.into(),
            required,
        }
    }
}

/// Ordered list of fields a callback needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationRequest {
    fields: Vec<ConfigurationField>,
}

impl ConfigurationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, replacing any previous field with the same key
    pub fn add_field(&mut self, field: ConfigurationField) -> &mut Self {
        self.fields.retain(|existing| existing.key != field.key);
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[ConfigurationField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&ConfigurationField> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Keys of all fields marked as required
    pub fn required_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.key.as_str())
    }
}
