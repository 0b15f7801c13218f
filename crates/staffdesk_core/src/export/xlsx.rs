//! Spreadsheet exporter.
//!
//! Writes one `Employees` sheet: a bold header row, then one row per record.
//! Text longer than a cell can hold is cut to [`MAX_CELL_CHARS`].

use super::ExportResult;
use crate::model::employee::{Employee, FIELD_LABELS};
use rust_xlsxwriter::{Format, Workbook};

pub const SHEET_NAME: &str = "Employees";

/// Excel's per-cell string limit, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Renders `records` as an XLSX workbook.
pub fn export_xlsx(records: &[Employee]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, label) in (0u16..).zip(FIELD_LABELS) {
        worksheet.write_string_with_format(0, col, label, &header_format)?;
    }

    for (row, employee) in (1u32..).zip(records) {
        // Numeric id keeps the column sortable in spreadsheet tools.
        worksheet.write_number(row, 0, employee.id.get() as f64)?;
        worksheet.write_string(row, 1, cell_text(&employee.name))?;
        worksheet.write_string(row, 2, cell_text(&employee.position))?;
        worksheet.write_string(row, 3, cell_text(&employee.department))?;
        worksheet.write_string(row, 4, employee.hire_date_text())?;
        worksheet.write_string(row, 5, cell_text(&employee.performance_review))?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn cell_text(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
