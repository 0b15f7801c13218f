//! Subcommands and their execution against the employee service.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use staffdesk_core::{
    parse_hire_date, Employee, EmployeeDraft, EmployeeId, EmployeeRepository, EmployeeService,
    ExportFormat, FIELD_LABELS,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new employee
    Add(EmployeeFields),
    /// List every employee
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one employee
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Replace every field of an existing employee
    Update {
        id: i64,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Delete an employee
    Delete { id: i64 },
    /// Find employees by name, position or department
    Search {
        term: String,
        #[arg(long)]
        json: bool,
    },
    /// Export every employee to a document
    Export {
        /// xlsx|docx|pdf
        format: ExportFormat,
        /// Output path; defaults to the suggested file name
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print total and per-department head counts
    Summary,
}

#[derive(Args, Debug, Clone)]
pub struct EmployeeFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub position: String,
    #[arg(long)]
    pub department: String,
    /// Hire date as YYYY-MM-DD
    #[arg(long, value_parser = parse_date_arg)]
    pub hire_date: NaiveDate,
    /// Performance review text
    #[arg(long, default_value = "")]
    pub review: String,
}

impl EmployeeFields {
    fn into_draft(self) -> EmployeeDraft {
        EmployeeDraft::new(
            self.name,
            self.position,
            self.department,
            self.hire_date,
            self.review,
        )
    }
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_hire_date(value).map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

/// Runs `command`, writing user-facing output to `out`.
pub fn run<R: EmployeeRepository>(
    service: &EmployeeService<R>,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Add(fields) => {
            let id = service.add_employee(&fields.into_draft())?;
            writeln!(out, "Employee added with id {id}.")?;
        }
        Command::List { json } => {
            let employees = service.list_employees()?;
            print_employees(out, &employees, json)?;
        }
        Command::Show { id, json } => match service.get_employee(EmployeeId(id))? {
            Some(employee) => print_employees(out, std::slice::from_ref(&employee), json)?,
            None => writeln!(out, "No employee with id {id}.")?,
        },
        Command::Update { id, fields } => {
            if service.update_employee(EmployeeId(id), &fields.into_draft())? {
                writeln!(out, "Employee {id} updated.")?;
            } else {
                writeln!(out, "No employee with id {id}; nothing updated.")?;
            }
        }
        Command::Delete { id } => {
            if service.delete_employee(EmployeeId(id))? {
                writeln!(out, "Employee {id} deleted.")?;
            } else {
                writeln!(out, "No employee with id {id}; nothing deleted.")?;
            }
        }
        Command::Search { term, json } => {
            let employees = service.search_employees(&term)?;
            if employees.is_empty() && !json {
                writeln!(out, "No matching employees found.")?;
            } else {
                print_employees(out, &employees, json)?;
            }
        }
        Command::Export { format, out: path } => {
            let file = service.export(format)?;
            let path = path.unwrap_or_else(|| PathBuf::from(file.file_name));
            std::fs::write(&path, &file.bytes)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            writeln!(
                out,
                "Wrote {} bytes to {}.",
                file.bytes.len(),
                path.display()
            )?;
        }
        Command::Summary => {
            let summary = service.summary()?;
            writeln!(out, "Total Employees: {}", summary.total)?;
            for entry in &summary.departments {
                writeln!(out, "  {}: {}", entry.department, entry.count)?;
            }
        }
    }
    Ok(())
}

fn print_employees(out: &mut impl Write, employees: &[Employee], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, employees)?;
        writeln!(out)?;
        return Ok(());
    }

    for line in render_table(employees) {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Lays out records as a fixed-width text table with a header row.
fn render_table(employees: &[Employee]) -> Vec<String> {
    let rows: Vec<[String; 6]> = employees
        .iter()
        .map(|employee| employee.field_values().map(|value| value.replace(['\n', '\r'], " ")))
        .collect();

    let mut widths = FIELD_LABELS.map(|label| label.chars().count());
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let format_row = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header = FIELD_LABELS.map(str::to_string);
    let mut lines = vec![format_row(&header[..])];
    lines.push(widths.map(|width| "-".repeat(width)).join("  "));
    lines.extend(rows.iter().map(|row| format_row(&row[..])));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdesk_core::db::open_db_in_memory;
    use staffdesk_core::SqliteEmployeeRepository;

    fn run_to_string<R: EmployeeRepository>(
        service: &EmployeeService<R>,
        args: &[&str],
    ) -> String {
        use clap::Parser;
        let cli = crate::config::Cli::try_parse_from(
            std::iter::once("staffdesk").chain(args.iter().copied()),
        )
        .unwrap();
        let mut out = Vec::new();
        run(service, cli.command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    const ANN: &[&str] = &[
        "add",
        "--name",
        "Ann",
        "--position",
        "Engineer",
        "--department",
        "R&D",
        "--hire-date",
        "2021-01-01",
        "--review",
        "Good",
    ];

    #[test]
    fn add_list_update_delete_flow() {
        let conn = open_db_in_memory().unwrap();
        let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

        assert_eq!(run_to_string(&service, ANN), "Employee added with id 1.\n");

        let table = run_to_string(&service, &["list"]);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID  Name"));
        assert!(lines[2].contains("Ann") && lines[2].contains("2021-01-01"));

        let updated = run_to_string(
            &service,
            &[
                "update", "1", "--name", "Ann B", "--position", "Lead", "--department", "R&D",
                "--hire-date", "2021-01-01",
            ],
        );
        assert_eq!(updated, "Employee 1 updated.\n");
        let json = run_to_string(&service, &["show", "1", "--json"]);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "Ann B");
        assert_eq!(parsed[0]["performance_review"], "");
        assert_eq!(parsed[0]["hire_date"], "2021-01-01");

        assert_eq!(
            run_to_string(&service, &["delete", "9"]),
            "No employee with id 9; nothing deleted.\n"
        );
        assert_eq!(run_to_string(&service, &["delete", "1"]), "Employee 1 deleted.\n");
        assert_eq!(
            run_to_string(&service, &["search", "Ann"]),
            "No matching employees found.\n"
        );
    }

    #[test]
    fn export_writes_buffer_to_requested_path() {
        let conn = open_db_in_memory().unwrap();
        let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());
        run_to_string(&service, ANN);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.pdf");
        let path_arg = path.to_str().unwrap();
        let message = run_to_string(&service, &["export", "pdf", "--out", path_arg]);

        assert!(message.starts_with("Wrote "));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn summary_prints_department_counts() {
        let conn = open_db_in_memory().unwrap();
        let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());
        run_to_string(&service, ANN);
        run_to_string(&service, ANN);

        assert_eq!(
            run_to_string(&service, &["summary"]),
            "Total Employees: 2\n  R&D: 2\n"
        );
    }

    #[test]
    fn invalid_hire_date_is_rejected_by_parser() {
        let result = <crate::config::Cli as clap::Parser>::try_parse_from([
            "staffdesk",
            "add",
            "--name",
            "Ann",
            "--position",
            "Engineer",
            "--department",
            "R&D",
            "--hire-date",
            "01/01/2021",
        ]);
        assert!(result.is_err());
    }
}
