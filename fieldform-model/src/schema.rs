use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// A declarative validation rule attached to a field.
///
/// Only `required` is interpreted by the store. Rule objects carrying other
/// keys (e.g. `{"pattern": "..."}`) still parse; the unknown keys are
/// dropped and the rule is inert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Rule {
    /// Shorthand for a `required` rule with a failure message.
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            required: Some(true),
            message: Some(message.into()),
        }
    }

    /// True when this rule demands a non-empty value.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required == Some(true)
    }
}

/// Configuration a field registers with: its name and its rules.
///
/// Unrecognized keys are rejected when parsing, so a typo such as
/// `"rule"` instead of `"rules"` surfaces as an error rather than a
/// silently unvalidated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldProps {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

impl FieldProps {
    /// A field with no rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Appends a rule. Only the first rule is ever evaluated.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rule the validator consults, if any.
    #[must_use]
    pub fn first_rule(&self) -> Option<&Rule> {
        self.rules.first()
    }

    /// Parses a single field configuration from JSON.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let props: Self = serde_json::from_str(json)?;
        if props.name.is_empty() {
            return Err(ModelError::EmptyFieldName { index: 0 });
        }
        Ok(props)
    }
}

/// One field that failed its rule during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub name: String,
    pub message: String,
}

impl FieldError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// The field list of a form, as loaded from a JSON document.
///
/// ```json
/// { "fields": [ { "name": "username", "rules": [ { "required": true, "message": "required" } ] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: Vec<FieldProps>,
}

impl FormSchema {
    /// Parses and checks a schema. Field names must be non-empty; duplicate
    /// names are allowed, matching registration semantics.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let schema: Self = serde_json::from_str(json)?;
        if let Some(index) = schema.fields.iter().position(|f| f.name.is_empty()) {
            return Err(ModelError::EmptyFieldName { index });
        }
        Ok(schema)
    }

    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
