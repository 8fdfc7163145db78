//! Form aggregate: ordered field storage, focus and whole-form validation

use super::field::FormField;
use super::schema::{FormSchema, FormVariant, Section};
use crate::state::{EarlyAccessSignup, Record, StudentRegistration};
use indexmap::IndexMap;

/// Current values and validation state of every field of one form
#[derive(Debug, Clone)]
pub struct FormState {
    pub variant: FormVariant,
    pub title: String,
    pub subtitle: String,
    pub submit_label: String,
    pub grade_word: String,
    pub sections: Vec<Section>,
    /// Field name -> field, in declaration order
    pub fields: IndexMap<String, FormField>,
    /// Focused row; `fields.len()` is the submit button
    pub active_field_index: usize,
}

impl FormState {
    pub fn new(schema: FormSchema) -> Self {
        let fields = schema
            .fields
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect();
        Self {
            variant: schema.variant,
            title: schema.title,
            subtitle: schema.subtitle,
            submit_label: schema.submit_label,
            grade_word: schema.grade_word,
            sections: schema.sections,
            fields,
            active_field_index: 0,
        }
    }

    pub fn for_variant(variant: FormVariant) -> Self {
        Self::new(FormSchema::for_variant(variant))
    }

    /// Number of focusable rows (fields plus the submit button)
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Focus a field by name
    pub fn focus(&mut self, name: &str) {
        if let Some(index) = self.fields.get_index_of(name) {
            self.active_field_index = index;
        }
    }

    pub fn active_field(&self) -> Option<&FormField> {
        self.fields
            .get_index(self.active_field_index)
            .map(|(_, f)| f)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields
            .get_index_mut(self.active_field_index)
            .map(|(_, f)| f)
    }

    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.get(name)
    }

    /// Value of a field, or "" for unknown names
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    #[cfg(test)]
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.value = value.to_string();
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            field.push_char(c);
        }
    }

    /// Delete from the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }

    pub fn select_next(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.select_next();
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.select_prev();
        }
    }

    /// Validate every field, refreshing each inline error.
    ///
    /// On failure returns every failing message in field declaration order;
    /// no field short-circuits the others.
    pub fn validate_all(&mut self) -> Result<Record, Vec<String>> {
        let errors: Vec<String> = self
            .fields
            .values_mut()
            .filter_map(FormField::validate)
            .collect();

        if errors.is_empty() {
            Ok(self.to_record())
        } else {
            Err(errors)
        }
    }

    /// Build the record from the current values. Only user-editable columns
    /// are carried.
    pub fn to_record(&self) -> Record {
        let text = |name: &str| self.value(name).trim().to_string();

        match self.variant {
            FormVariant::Registration => {
                Record::Student(StudentRegistration {
                    student_name: text("student_name"),
                    contact_number: text("contact_number"),
                    school_name: text("school_name"),
                    school_address: text("school_address"),
                    grade: text("grade"),
                    special_code: text("special_code"),
                })
            }
            FormVariant::Landing => Record::EarlyAccess(EarlyAccessSignup {
                name: text("name"),
                phone: text("phone"),
                school_name: text("school_name"),
                class_name: text("class"),
                special_code: text("special_code"),
            }),
        }
    }

    /// Clear every value and inline error and focus the first field
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.clear();
        }
        self.active_field_index = 0;
    }

    /// Field names with an inline error
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .values()
            .filter(|f| f.error.is_some())
            .map(|f| f.name.as_str())
            .collect()
    }
}
