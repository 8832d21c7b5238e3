//! Board configuration.
//!
//! Every field has a default, so an empty JSON object is a complete config.
//! The form rules describe how each input field is validated before a project
//! is created.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::validate::{FieldValue, Validatable};

pub const DEFAULT_HOST_ID: &str = "app";
pub const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;
pub const DEFAULT_PEOPLE_MIN: f64 = 1.0;
pub const DEFAULT_PEOPLE_MAX: f64 = 10.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level board configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Id of the element the board is mounted into.
    pub host_id: String,
    pub rules: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { host_id: DEFAULT_HOST_ID.to_owned(), rules: FormRules::default() }
    }
}

impl BoardConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Validation rules for the three project input fields.
///
/// Each field in the JSON is an overlay on that field's own default: keys
/// that are present replace the default constraint, absent keys keep it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "FormRulesPatch")]
pub struct FormRules {
    pub title: FieldRules,
    pub description: FieldRules,
    pub people: FieldRules,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: FieldRules { required: true, ..FieldRules::default() },
            description: FieldRules {
                required: true,
                min_length: Some(DEFAULT_DESCRIPTION_MIN_LENGTH),
                ..FieldRules::default()
            },
            people: FieldRules {
                required: true,
                min: Some(DEFAULT_PEOPLE_MIN),
                max: Some(DEFAULT_PEOPLE_MAX),
                ..FieldRules::default()
            },
        }
    }
}

/// Constraints for one field. Absent constraints are not checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Wire form of [`FormRules`]: only the keys the config actually sets.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FormRulesPatch {
    title: FieldRulesPatch,
    description: FieldRulesPatch,
    people: FieldRulesPatch,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FieldRulesPatch {
    required: Option<bool>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
}

impl FieldRulesPatch {
    fn apply(self, base: FieldRules) -> FieldRules {
        FieldRules {
            required: self.required.unwrap_or(base.required),
            min_length: self.min_length.or(base.min_length),
            max_length: self.max_length.or(base.max_length),
            min: self.min.or(base.min),
            max: self.max.or(base.max),
        }
    }
}

impl From<FormRulesPatch> for FormRules {
    fn from(patch: FormRulesPatch) -> Self {
        let base = Self::default();
        Self {
            title: patch.title.apply(base.title),
            description: patch.description.apply(base.description),
            people: patch.people.apply(base.people),
        }
    }
}

impl FieldRules {
    /// Attach these rules to a value.
    pub fn to_validatable(&self, value: impl Into<FieldValue>) -> Validatable {
        Validatable {
            value: value.into(),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }
}
