//! Records sent to the hosted table and receipts returned from it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row inserted into the `students` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRegistration {
    pub student_name: String,
    pub contact_number: String,
    pub school_name: String,
    pub school_address: String,
    pub grade: String,
    /// Optional; sent as `""` when left blank
    pub special_code: String,
}

/// Row inserted into the `registrations` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarlyAccessSignup {
    pub name: String,
    pub phone: String,
    pub school_name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub special_code: String,
}

/// The client-editable subset of a row. Server-assigned columns (`id`,
/// `created_at`) are not representable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Student(StudentRegistration),
    EarlyAccess(EarlyAccessSignup),
}

impl Record {
    /// Target table for this record
    pub fn table(&self) -> &'static str {
        match self {
            Record::Student(_) => "students",
            Record::EarlyAccess(_) => "registrations",
        }
    }

    /// Submitter name, as entered
    pub fn name(&self) -> &str {
        match self {
            Record::Student(r) => &r.student_name,
            Record::EarlyAccess(r) => &r.name,
        }
    }

    /// Grade or class, as entered
    pub fn grade(&self) -> &str {
        match self {
            Record::Student(r) => &r.grade,
            Record::EarlyAccess(r) => &r.class_name,
        }
    }
}

/// Server-assigned columns echoed back after an insert
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn student() -> StudentRegistration {
        StudentRegistration {
            student_name: "Asha Rao".to_string(),
            contact_number: "1234567890".to_string(),
            school_name: "Springfield High".to_string(),
            school_address: "12 Elm Street".to_string(),
            grade: "9".to_string(),
            special_code: String::new(),
        }
    }

    #[test]
    fn test_student_payload_has_every_editable_column() {
        let value = serde_json::to_value(Record::Student(student())).unwrap();
        assert_eq!(
            value,
            json!({
                "student_name": "Asha Rao",
                "contact_number": "1234567890",
                "school_name": "Springfield High",
                "school_address": "12 Elm Street",
                "grade": "9",
                "special_code": "",
            })
        );
    }

    #[test]
    fn test_student_payload_includes_code_when_present() {
        let record = StudentRegistration {
            special_code: "XCEL10".to_string(),
            ..student()
        };
        let value = serde_json::to_value(Record::Student(record)).unwrap();
        assert_eq!(value["special_code"], "XCEL10");
    }

    #[test]
    fn test_early_access_payload_uses_class_column() {
        let record = Record::EarlyAccess(EarlyAccessSignup {
            name: "Ravi".to_string(),
            phone: "5551234".to_string(),
            school_name: "Lincoln".to_string(),
            class_name: "7".to_string(),
            special_code: "EARLY".to_string(),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ravi",
                "phone": "5551234",
                "school_name": "Lincoln",
                "class": "7",
                "special_code": "EARLY",
            })
        );
        assert!(value.get("id").is_none());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_table_and_summary() {
        let record = Record::Student(student());
        assert_eq!(record.table(), "students");
        assert_eq!(record.name(), "Asha Rao");
        assert_eq!(record.grade(), "9");
    }

    #[test]
    fn test_receipt_from_stored_row() {
        let row = json!({
            "id": "6f1c1c2e-0b5a-4a57-9d0e-2a9a51c0f9a1",
            "created_at": "2024-03-01T10:15:00+00:00",
            "student_name": "Asha Rao",
        });
        let receipt: Receipt = serde_json::from_value(row).unwrap();
        assert!(receipt.id.is_some());
        assert_eq!(
            receipt.created_at.unwrap().to_rfc3339(),
            "2024-03-01T10:15:00+00:00"
        );
    }

    #[test]
    fn test_receipt_tolerates_missing_columns() {
        let receipt: Receipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt, Receipt::default());
    }
}
