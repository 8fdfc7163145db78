//! Field validation rules
//!
//! Validation is a pure function of a field's label, its raw value and the
//! rule attached to it, so it can be exercised without any rendering.

use regex::Regex;

/// Rule attached to a single form field
#[derive(Debug, Clone, Default)]
pub struct ValidationRule {
    /// Field must be non-empty
    pub required: bool,
    /// Pattern a non-empty value must match in full
    pub pattern: Option<Regex>,
    /// Accepted values for select fields (empty = unrestricted)
    pub allowed: Vec<String>,
}

impl ValidationRule {
    /// A rule that only requires a value
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// A rule that accepts anything, including an empty value
    pub fn optional() -> Self {
        Self::default()
    }

    /// Attach a pattern to this rule
    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Restrict the value to an enumerated set
    pub fn with_allowed<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = allowed.into_iter().map(Into::into).collect();
        self
    }
}

/// Validate a raw value against a rule.
///
/// Returns the first failing message, checked in order: required, pattern,
/// allowed options. Empty optional values pass without further checks.
/// Surrounding whitespace is ignored, matching the trimmed value that is sent.
pub fn validate(label: &str, value: &str, rule: &ValidationRule) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return if rule.required {
            Err(required_message(label))
        } else {
            Ok(())
        };
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(value) {
            return Err(format!("Please enter a valid {}.", label.to_lowercase()));
        }
    }

    if !rule.allowed.is_empty() && !rule.allowed.iter().any(|a| a == value) {
        return Err(format!("Please select a valid {}.", label.to_lowercase()));
    }

    Ok(())
}

/// Message shown when a required field is empty
pub fn required_message(label: &str) -> String {
    format!("{label} is required.")
}
