//! Field validation.
//!
//! A [`Validatable`] pairs one input value with the constraints that apply to
//! it. Length bounds are inclusive and only apply to text; numeric bounds are
//! strict and only apply to numbers. Validation never fails, it only answers.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::cmp::Ordering;
use std::fmt;

/// The value under test, either raw text or a parsed number.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// One value plus the constraints to check it against. Absent constraints
/// are not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// A value with no constraints attached.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    #[must_use]
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    #[must_use]
    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    #[must_use]
    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// A constraint a value failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    /// Value is empty after trimming.
    Required,
    /// Text is shorter than `min_length` characters.
    TooShort(usize),
    /// Text is longer than `max_length` characters.
    TooLong(usize),
    /// Number is not strictly greater than `min`.
    TooSmall(f64),
    /// Number is not strictly less than `max`.
    TooLarge(f64),
}

/// Check a value against every constraint it carries.
#[must_use]
pub fn validate(input: &Validatable) -> bool {
    violations(input).is_empty()
}

/// List every constraint the value fails, in declaration order.
#[must_use]
pub fn violations(input: &Validatable) -> Vec<Violation> {
    let mut out = Vec::new();

    if input.required && input.value.to_string().trim().is_empty() {
        out.push(Violation::Required);
    }

    match &input.value {
        FieldValue::Text(text) => {
            let len = text.chars().count();
            if let Some(min_length) = input.min_length {
                if len < min_length {
                    out.push(Violation::TooShort(min_length));
                }
            }
            if let Some(max_length) = input.max_length {
                if len > max_length {
                    out.push(Violation::TooLong(max_length));
                }
            }
        }
        FieldValue::Number(n) => {
            // NaN compares as unordered and fails both bounds.
            if let Some(min) = input.min {
                if n.partial_cmp(&min) != Some(Ordering::Greater) {
                    out.push(Violation::TooSmall(min));
                }
            }
            if let Some(max) = input.max {
                if n.partial_cmp(&max) != Some(Ordering::Less) {
                    out.push(Violation::TooLarge(max));
                }
            }
        }
    }

    out
}
