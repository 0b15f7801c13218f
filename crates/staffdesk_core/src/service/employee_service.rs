//! Employee use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD, search, summary and export entry points.
//! - Delegate persistence to repository implementations.
//! - Emit metadata-only log events (ids and counts, never field values).
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::export::{export, ExportError, ExportFormat, ExportedFile};
use crate::model::employee::{Employee, EmployeeDraft, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use crate::service::summary::{summarize, EmployeeSummary};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for employee use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Document backend failure; no buffer is produced.
    Export(ExportError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ExportError> for ServiceError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

/// Use-case service wrapper for employee records.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new employee and returns the store-assigned id.
    pub fn add_employee(&self, draft: &EmployeeDraft) -> ServiceResult<EmployeeId> {
        let id = self.repo.create_employee(draft)?;
        info!("event=employee_create module=service status=ok id={id}");
        Ok(id)
    }

    /// Lists every employee in store retrieval order.
    pub fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        let employees = self.repo.list_employees()?;
        debug!(
            "event=employee_list module=service status=ok count={}",
            employees.len()
        );
        Ok(employees)
    }

    pub fn get_employee(&self, id: EmployeeId) -> ServiceResult<Option<Employee>> {
        Ok(self.repo.get_employee(id)?)
    }

    /// Replaces every field of employee `id`.
    ///
    /// Returns `false` when `id` does not exist; nothing is changed then.
    pub fn update_employee(&self, id: EmployeeId, draft: &EmployeeDraft) -> ServiceResult<bool> {
        let updated = self.repo.update_employee(id, draft)?;
        if updated {
            info!("event=employee_update module=service status=ok id={id}");
        } else {
            warn!("event=employee_update module=service status=noop reason=not_found id={id}");
        }
        Ok(updated)
    }

    /// Deletes employee `id`.
    ///
    /// Returns `false` when `id` does not exist.
    pub fn delete_employee(&self, id: EmployeeId) -> ServiceResult<bool> {
        let deleted = self.repo.delete_employee(id)?;
        if deleted {
            info!("event=employee_delete module=service status=ok id={id}");
        } else {
            warn!("event=employee_delete module=service status=noop reason=not_found id={id}");
        }
        Ok(deleted)
    }

    /// Finds employees whose name, position or department contains `term`.
    pub fn search_employees(&self, term: &str) -> ServiceResult<Vec<Employee>> {
        let employees = self.repo.search_employees(term)?;
        debug!(
            "event=employee_search module=service status=ok term_len={} count={}",
            term.chars().count(),
            employees.len()
        );
        Ok(employees)
    }

    /// Computes head counts over the full record set.
    pub fn summary(&self) -> ServiceResult<EmployeeSummary> {
        Ok(summarize(&self.repo.list_employees()?))
    }

    /// Exports the full record set in `format`.
    pub fn export(&self, format: ExportFormat) -> ServiceResult<ExportedFile> {
        let employees = self.repo.list_employees()?;
        match export(format, &employees) {
            Ok(file) => {
                info!(
                    "event=employee_export module=service status=ok format={} count={} bytes={}",
                    format,
                    employees.len(),
                    file.bytes.len()
                );
                Ok(file)
            }
            Err(err) => {
                warn!(
                    "event=employee_export module=service status=error format={} error={}",
                    format, err
                );
                Err(err.into())
            }
        }
    }
}
