//! User data model and request types.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, unique within the store.
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

/// Request body for creating a user.
///
/// The store assigns the identifier; any caller-supplied id is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

/// A single failed field check, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl CreateUserRequest {
    /// Check required-field constraints. Returns one violation per failing
    /// field; an empty vec means the request is valid.
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation {
                field: "name",
                message: "name must not be empty".to_string(),
            });
        }

        if let Some(birth_date) = self.birth_date {
            if birth_date > Utc::now().date_naive() {
                violations.push(FieldViolation {
                    field: "birth_date",
                    message: "birth_date must be a date in the past".to_string(),
                });
            }
        }

        violations
    }
}
