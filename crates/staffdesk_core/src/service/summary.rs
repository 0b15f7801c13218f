//! Head-count summary over an employee record set.
//!
//! # Invariants
//! - Department counts are ordered by count descending, then name ascending.
//! - Counts always sum to `total`.

use crate::model::employee::Employee;
use serde::Serialize;
use std::collections::HashMap;

/// Number of employees in one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

/// Total and per-department head counts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EmployeeSummary {
    pub total: usize,
    pub departments: Vec<DepartmentCount>,
}

/// Summarizes `records` by department.
pub fn summarize(records: &[Employee]) -> EmployeeSummary {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for employee in records {
        *counts.entry(employee.department.as_str()).or_default() += 1;
    }

    let mut departments = counts
        .into_iter()
        .map(|(department, count)| DepartmentCount {
            department: department.to_string(),
            count,
        })
        .collect::<Vec<_>>();
    departments.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.department.cmp(&b.department))
    });

    EmployeeSummary {
        total: records.len(),
        departments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::{EmployeeDraft, EmployeeId};
    use chrono::NaiveDate;

    fn in_department(id: i64, department: &str) -> Employee {
        EmployeeDraft::new(
            "name",
            "role",
            department,
            NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
            "",
        )
        .into_employee(EmployeeId(id))
    }

    #[test]
    fn empty_set_has_no_departments() {
        assert_eq!(summarize(&[]), EmployeeSummary::default());
    }

    #[test]
    fn departments_sorted_by_count_then_name() {
        let records = [
            in_department(1, "Sales"),
            in_department(2, "R&D"),
            in_department(3, "Sales"),
            in_department(4, "Ops"),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total, 4);
        let order: Vec<_> = summary
            .departments
            .iter()
            .map(|entry| (entry.department.as_str(), entry.count))
            .collect();
        assert_eq!(order, [("Sales", 2), ("Ops", 1), ("R&D", 1)]);
    }
}
