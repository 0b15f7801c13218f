//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and substring search over the `employees` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Repositories are only constructed over bootstrapped connections.
//! - `update_employee` replaces every field; there is no partial update.
//! - Update/delete of a missing id is a no-op reported as `false`.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::employee::{
    parse_hire_date, Employee, EmployeeDraft, EmployeeId, HIRE_DATE_FORMAT,
};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEES_TABLE: &str = "employees";
const REQUIRED_COLUMNS: [&str; 6] = [
    "id",
    "name",
    "position",
    "department",
    "hire_date",
    "performance_review",
];

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    position,
    department,
    hire_date,
    performance_review
FROM employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it with open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for employee CRUD and search.
pub trait EmployeeRepository {
    fn create_employee(&self, draft: &EmployeeDraft) -> RepoResult<EmployeeId>;
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Returns `false` when no row matched `id`.
    fn update_employee(&self, id: EmployeeId, draft: &EmployeeDraft) -> RepoResult<bool>;
    /// Returns `false` when no row matched `id`.
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<bool>;
    fn search_employees(&self, term: &str) -> RepoResult<Vec<Employee>>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Wraps a connection after checking that the schema bootstrap ran.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `user_version` is not the latest.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the stamped
    ///   schema does not actually contain the employees table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        ensure_schema(conn)?;
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_employee(&self, draft: &EmployeeDraft) -> RepoResult<EmployeeId> {
        self.conn.execute(
            "INSERT INTO employees (
                name,
                position,
                department,
                hire_date,
                performance_review
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                draft.name.as_str(),
                draft.position.as_str(),
                draft.department.as_str(),
                draft.hire_date.format(HIRE_DATE_FORMAT).to_string(),
                draft.performance_review.as_str(),
            ],
        )?;

        Ok(EmployeeId(self.conn.last_insert_rowid()))
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.get()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn update_employee(&self, id: EmployeeId, draft: &EmployeeDraft) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE employees
             SET
                name = ?1,
                position = ?2,
                department = ?3,
                hire_date = ?4,
                performance_review = ?5
             WHERE id = ?6;",
            params![
                draft.name.as_str(),
                draft.position.as_str(),
                draft.department.as_str(),
                draft.hire_date.format(HIRE_DATE_FORMAT).to_string(),
                draft.performance_review.as_str(),
                id.get(),
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id.get()])?;

        Ok(changed > 0)
    }

    fn search_employees(&self, term: &str) -> RepoResult<Vec<Employee>> {
        let pattern = like_contains_pattern(term);
        let mut stmt = self.conn.prepare(&format!(
            "{EMPLOYEE_SELECT_SQL}
             WHERE name LIKE ?1 ESCAPE '\\'
                OR position LIKE ?1 ESCAPE '\\'
                OR department LIKE ?1 ESCAPE '\\'
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query([pattern])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }
}

fn ensure_schema(conn: &Connection) -> RepoResult<()> {
    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [EMPLOYEES_TABLE],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable(EMPLOYEES_TABLE));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({EMPLOYEES_TABLE});"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<Vec<_>, _>>()?;

    for column in REQUIRED_COLUMNS {
        if !columns.iter().any(|existing| existing == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: EMPLOYEES_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let hire_date_text: String = row.get("hire_date")?;
    let hire_date = parse_hire_date(&hire_date_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid hire date `{hire_date_text}` in employees.hire_date"
        ))
    })?;

    Ok(Employee {
        id: EmployeeId(row.get("id")?),
        name: row.get("name")?,
        position: row.get("position")?,
        department: row.get("department")?,
        hire_date,
        performance_review: row.get("performance_review")?,
    })
}

/// Builds a `LIKE` pattern matching `term` literally anywhere in a value.
fn like_contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::like_contains_pattern;

    #[test]
    fn like_pattern_wraps_and_escapes_wildcards() {
        assert_eq!(like_contains_pattern(""), "%%");
        assert_eq!(like_contains_pattern("Ann"), "%Ann%");
        assert_eq!(like_contains_pattern("50%_a\\b"), "%50\\%\\_a\\\\b%");
    }
}
