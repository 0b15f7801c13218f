//! Document exporters for employee record sets.
//!
//! # Responsibility
//! - Turn an in-memory record set into a downloadable byte buffer.
//! - Name the suggested file for each supported document format.
//!
//! # Invariants
//! - Exporters are pure: they never touch the store.
//! - Records are emitted in input order with canonical field order.
//! - A failed export never returns a partial buffer.

use crate::model::employee::{Employee, EmployeeId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod docx;
pub mod pdf;
pub mod xlsx;

/// Title shared by the document and report exporters.
pub const DOCUMENT_TITLE: &str = "Employee Data";

pub type ExportResult<T> = Result<T, ExportError>;

/// Failure raised by a document-writing backend.
#[derive(Debug)]
pub enum ExportError {
    Xlsx(rust_xlsxwriter::XlsxError),
    Docx(String),
    Pdf(String),
    /// A field holds a character the target format cannot represent.
    Unencodable {
        format: ExportFormat,
        employee_id: EmployeeId,
        character: char,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xlsx(err) => write!(f, "spreadsheet export failed: {err}"),
            Self::Docx(message) => write!(f, "document export failed: {message}"),
            Self::Pdf(message) => write!(f, "pdf export failed: {message}"),
            Self::Unencodable {
                format,
                employee_id,
                character,
            } => write!(
                f,
                "employee {employee_id} contains character {character:?} that cannot be written to {format}"
            ),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Xlsx(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        Self::Xlsx(value)
    }
}

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Single-sheet spreadsheet.
    Xlsx,
    /// Word-processing document with one paragraph per record.
    Docx,
    /// Paginated text report.
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Xlsx, Self::Docx, Self::Pdf];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }

    /// Suggested download name for this format.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Xlsx => "employee_data.xlsx",
            Self::Docx => "employee_data.docx",
            Self::Pdf => "employee_data.pdf",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Pdf => "application/pdf",
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "docx" | "word" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!(
                "unsupported export format `{other}`; expected xlsx|docx|pdf"
            )),
        }
    }
}

/// Export buffer ready to hand to a caller for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Fails with `Unencodable` on the first field character `allowed` rejects.
fn ensure_encodable(
    format: ExportFormat,
    records: &[Employee],
    allowed: impl Fn(char) -> bool,
) -> ExportResult<()> {
    for employee in records {
        for value in employee.field_values() {
            if let Some(character) = value.chars().find(|ch| !allowed(*ch)) {
                return Err(ExportError::Unencodable {
                    format,
                    employee_id: employee.id,
                    character,
                });
            }
        }
    }
    Ok(())
}

/// Renders `records` in `format`.
pub fn export(format: ExportFormat, records: &[Employee]) -> ExportResult<ExportedFile> {
    let bytes = match format {
        ExportFormat::Xlsx => xlsx::export_xlsx(records)?,
        ExportFormat::Docx => docx::export_docx(records)?,
        ExportFormat::Pdf => pdf::export_pdf(records)?,
    };

    Ok(ExportedFile {
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::ExportFormat;

    #[test]
    fn format_parsing_accepts_aliases() {
        assert_eq!("XLSX".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!("word".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
        assert_eq!(" pdf ".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn unencodable_reports_first_offending_record() {
        use super::{ensure_encodable, ExportError};
        use crate::model::employee::{EmployeeDraft, EmployeeId};
        use chrono::NaiveDate;

        let records: Vec<_> = ["ok", "bad!", "worse!"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| {
                EmployeeDraft::new(name, "", "", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), "")
                    .into_employee(EmployeeId(id))
            })
            .collect();

        let err = ensure_encodable(ExportFormat::Docx, &records, |ch| ch != '!').unwrap_err();
        assert!(matches!(
            err,
            ExportError::Unencodable {
                format: ExportFormat::Docx,
                employee_id: EmployeeId(2),
                character: '!',
            }
        ));
    }

    #[test]
    fn file_names_match_extensions() {
        for format in ExportFormat::ALL {
            assert!(format.file_name().ends_with(format.extension()));
        }
    }
}
