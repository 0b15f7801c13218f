//! Employee domain model.
//!
//! # Responsibility
//! - Define the six-field employee record and its caller-supplied draft.
//! - Expose the fixed `(label, value)` field order consumed by exporters.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another record.
//! - Field order is always `ID, Name, Position, Department, Hire Date,
//!   Performance Review`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Text serialization used for `hire_date` in storage and exports.
pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Column labels in canonical field order.
pub const FIELD_LABELS: [&str; 6] = [
    "ID",
    "Name",
    "Position",
    "Department",
    "Hire Date",
    "Performance Review",
];

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Caller-supplied employee fields used by create and full-replace update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub performance_review: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
        hire_date: NaiveDate,
        performance_review: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department: department.into(),
            hire_date,
            performance_review: performance_review.into(),
        }
    }

    /// Attaches a store-assigned id, producing a complete record.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            position: self.position,
            department: self.department,
            hire_date: self.hire_date,
            performance_review: self.performance_review,
        }
    }
}

/// Canonical employee record as persisted in the `employees` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub performance_review: String,
}

impl Employee {
    /// Returns the hire date in its stored `YYYY-MM-DD` form.
    pub fn hire_date_text(&self) -> String {
        self.hire_date.format(HIRE_DATE_FORMAT).to_string()
    }

    /// Returns every field as display text, in canonical order.
    pub fn field_values(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.position.clone(),
            self.department.clone(),
            self.hire_date_text(),
            self.performance_review.clone(),
        ]
    }

    /// Returns `(label, value)` pairs in canonical order.
    pub fn labeled_fields(&self) -> [(&'static str, String); 6] {
        let [id, name, position, department, hire_date, review] = self.field_values();
        [
            (FIELD_LABELS[0], id),
            (FIELD_LABELS[1], name),
            (FIELD_LABELS[2], position),
            (FIELD_LABELS[3], department),
            (FIELD_LABELS[4], hire_date),
            (FIELD_LABELS[5], review),
        ]
    }

    /// Drops the id, keeping the caller-editable fields.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            hire_date: self.hire_date,
            performance_review: self.performance_review.clone(),
        }
    }
}

/// Parses a stored or user-entered `YYYY-MM-DD` date.
pub fn parse_hire_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), HIRE_DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        EmployeeDraft::new(
            "Ann",
            "Engineer",
            "R&D",
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            "Good",
        )
        .into_employee(EmployeeId(1))
    }

    #[test]
    fn labeled_fields_follow_canonical_order() {
        let labels: Vec<_> = sample()
            .labeled_fields()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, FIELD_LABELS);
    }

    #[test]
    fn hire_date_uses_iso_text() {
        assert_eq!(sample().hire_date_text(), "2021-01-01");
        assert_eq!(
            parse_hire_date(" 2020-05-05 ").unwrap(),
            NaiveDate::from_ymd_opt(2020, 5, 5).unwrap()
        );
        assert!(parse_hire_date("05/05/2020").is_err());
    }
}
