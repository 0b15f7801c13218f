//! Core domain logic for staffdesk, a single-user employee records manager.
//! This crate owns persistence, search, summaries and document export.

pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{close_db, open_db, open_db_in_memory, DbError, DEFAULT_DB_FILE};
pub use export::{export, ExportError, ExportFormat, ExportedFile};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{parse_hire_date, Employee, EmployeeDraft, EmployeeId, FIELD_LABELS};
pub use repo::employee_repo::{EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository};
pub use service::employee_service::{EmployeeService, ServiceError, ServiceResult};
pub use service::summary::{summarize, DepartmentCount, EmployeeSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
