//! The two form configurations
//!
//! Both variants share the same form-plus-submit machinery and differ only in
//! their fields, rules, copy and target table.

use super::field::{FormField, SelectOption};
use super::rules::ValidationRule;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which form the application presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Student registration, stored in `students`
    #[default]
    Registration,
    /// Coming-soon page with early-access signup, stored in `registrations`
    Landing,
}

/// A titled group of fields, referenced by field name
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub fields: Vec<String>,
}

/// Static description of one form variant
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub variant: FormVariant,
    pub title: String,
    pub subtitle: String,
    pub submit_label: String,
    /// Word used before the grade value in the success dialog
    pub grade_word: String,
    pub sections: Vec<Section>,
    /// Fields in declaration order
    pub fields: Vec<FormField>,
}

fn section(title: &str, fields: &[&str]) -> Section {
    Section {
        title: title.to_string(),
        fields: fields.iter().map(|f| f.to_string()).collect(),
    }
}

/// Exactly ten ASCII digits; `\d` would also admit other scripts' digits
fn ten_digits() -> Regex {
    Regex::new(r"^[0-9]{10}$").expect("phone pattern is a valid regex")
}

impl FormSchema {
    pub fn for_variant(variant: FormVariant) -> Self {
        match variant {
            FormVariant::Registration => Self::registration(),
            FormVariant::Landing => Self::landing(),
        }
    }

    /// Student registration form
    pub fn registration() -> Self {
        let fields = vec![
            FormField::text(
                "student_name",
                "Student's Name",
                "Enter full name",
                ValidationRule::required(),
            ),
            FormField::phone(
                "contact_number",
                "Contact Number",
                "Enter 10-digit number",
                ValidationRule::required().with_pattern(ten_digits()),
            ),
            FormField::text(
                "school_name",
                "School Name",
                "Enter school name",
                ValidationRule::required(),
            ),
            FormField::text(
                "school_address",
                "School Address",
                "Enter school address",
                ValidationRule::required(),
            ),
            FormField::select(
                "grade",
                "Grade",
                vec![
                    SelectOption::new("8", "Grade 8"),
                    SelectOption::new("9", "Grade 9"),
                    SelectOption::new("10", "Grade 10"),
                ],
                ValidationRule::required(),
            ),
            FormField::text(
                "special_code",
                "Special Code",
                "Enter special code (optional)",
                ValidationRule::optional(),
            )
            .with_help("Enter if you were provided with a special discount code"),
        ];

        Self {
            variant: FormVariant::Registration,
            title: "Student Registration".to_string(),
            subtitle: "Fill in the details to register for our teaching institution".to_string(),
            submit_label: "Complete Registration".to_string(),
            grade_word: "Grade".to_string(),
            sections: vec![
                section("Personal Information", &["student_name", "contact_number"]),
                section("Institution Details", &["school_name", "school_address"]),
                section("Academic Details", &["grade"]),
                section("Additional Information", &["special_code"]),
            ],
            fields,
        }
    }

    /// Coming-soon landing page signup form
    pub fn landing() -> Self {
        let fields = vec![
            FormField::text("name", "Name", "Enter your name", ValidationRule::required()),
            FormField::phone(
                "phone",
                "Phone Number",
                "Enter phone number",
                ValidationRule::required(),
            ),
            FormField::text(
                "school_name",
                "School Name",
                "Enter school name",
                ValidationRule::required(),
            ),
            FormField::text("class", "Class", "Enter class", ValidationRule::required()),
            FormField::text(
                "special_code",
                "Discount Code",
                "Enter discount code",
                ValidationRule::required(),
            )
            .with_help("Early-access members get a discount at launch"),
        ];

        Self {
            variant: FormVariant::Landing,
            title: "Coming Soon".to_string(),
            subtitle: "Sign up for early access before we launch".to_string(),
            submit_label: "Get Early Access".to_string(),
            grade_word: "Class".to_string(),
            sections: vec![
                section("About You", &["name", "phone"]),
                section("School", &["school_name", "class", "special_code"]),
            ],
            fields,
        }
    }
}
