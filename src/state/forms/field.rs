//! Form field value objects

use super::rules::{validate, ValidationRule};

/// A single entry of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// How a field accepts input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Phone number; typed like text, constrained by its rule
    Phone,
    /// Single choice from a fixed option list
    Select(Vec<SelectOption>),
}

/// Represents a single form field with its configuration, value and
/// validation state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
    pub rule: ValidationRule,
    pub help_text: Option<String>,
    pub value: String,
    /// Inline error from the last validation pass
    pub error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, rule: ValidationRule) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind: FieldKind::Text,
            rule,
            help_text: None,
            value: String::new(),
            error: None,
        }
    }

    /// Create a new phone field
    pub fn phone(name: &str, label: &str, placeholder: &str, rule: ValidationRule) -> Self {
        Self {
            kind: FieldKind::Phone,
            ..Self::text(name, label, placeholder, rule)
        }
    }

    /// Create a new select field; the rule is restricted to the option values
    pub fn select(name: &str, label: &str, options: Vec<SelectOption>, rule: ValidationRule) -> Self {
        let rule = rule.with_allowed(options.iter().map(|o| o.value.clone()));
        Self {
            kind: FieldKind::Select(options),
            ..Self::text(name, label, &format!("Select {label}"), rule)
        }
    }

    /// Attach help text shown under the field
    pub fn with_help(mut self, help: &str) -> Self {
        self.help_text = Some(help.to_string());
        self
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select(_))
    }

    /// Push a character to the field value (ignored by select fields)
    pub fn push_char(&mut self, c: char) {
        if !self.is_select() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match self.kind {
            FieldKind::Select(_) => self.value.clear(),
            _ => {
                self.value.pop();
            }
        }
    }

    /// Move a select field to the next option (wraps around)
    pub fn select_next(&mut self) {
        if let FieldKind::Select(options) = &self.kind {
            if options.is_empty() {
                return;
            }
            let next = match options.iter().position(|o| o.value == self.value) {
                Some(i) => (i + 1) % options.len(),
                None => 0,
            };
            self.value = options[next].value.clone();
        }
    }

    /// Move a select field to the previous option (wraps around)
    pub fn select_prev(&mut self) {
        if let FieldKind::Select(options) = &self.kind {
            if options.is_empty() {
                return;
            }
            let prev = match options.iter().position(|o| o.value == self.value) {
                Some(0) | None => options.len() - 1,
                Some(i) => i - 1,
            };
            self.value = options[prev].value.clone();
        }
    }

    /// Clear value and inline error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Run this field's rule and store the inline error.
    /// Returns the failure message, if any.
    pub fn validate(&mut self) -> Option<String> {
        self.error = validate(&self.label, &self.value, &self.rule).err();
        self.error.clone()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Select(options) => options
                .iter()
                .find(|o| o.value == self.value)
                .map(|o| o.label.clone())
                .unwrap_or_default(),
            _ => self.value.clone(),
        }
    }
}
