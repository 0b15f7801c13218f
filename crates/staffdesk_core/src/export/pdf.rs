//! Paginated text report exporter.
//!
//! # Responsibility
//! - Lay out a centered title and one `Label: value | ...` line per record.
//! - Start a new page whenever the current one is full.
//!
//! # Invariants
//! - Text uses the built-in Helvetica font, so every character must be
//!   representable in Latin-1.
//! - Layout is computed before rendering; a layout failure produces no PDF.

use super::{ensure_encodable, ExportError, ExportFormat, ExportResult, DOCUMENT_TITLE};
use crate::model::employee::Employee;
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 10.0;
// Title cell spans the text area, starting at the left margin.
const TITLE_CELL_WIDTH_MM: f32 = 200.0;
const FONT_SIZE_PT: f32 = 12.0;
const PT_TO_MM: f32 = 25.4 / 72.0;
// Average Helvetica glyph advance, in em.
const AVERAGE_GLYPH_EM: f32 = 0.5;
const LAYER_NAME: &str = "Layer 1";

/// Separator placed between `Label: value` pairs on a report line.
pub const FIELD_SEPARATOR: &str = " | ";

/// One positioned line of text; coordinates are from the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
}

/// Lines that fit on a single page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportPage {
    pub lines: Vec<PlacedLine>,
}

/// Builds the report line for every record, in input order.
pub fn report_lines(records: &[Employee]) -> Vec<String> {
    records.iter().map(report_line).collect()
}

fn report_line(employee: &Employee) -> String {
    employee
        .labeled_fields()
        .iter()
        .map(|(label, value)| format!("{label}: {}", value.replace(['\n', '\r'], " ")))
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// Positions the title and record lines onto A4 pages.
///
/// # Errors
/// - `Unencodable` when a record holds a character outside Latin-1.
pub fn layout_report(records: &[Employee]) -> ExportResult<Vec<ReportPage>> {
    ensure_encodable(ExportFormat::Pdf, records, is_latin1)?;

    let top = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;
    let mut pages = vec![ReportPage::default()];
    let mut cursor_y = top;

    pages[0].lines.push(PlacedLine {
        text: DOCUMENT_TITLE.to_string(),
        x_mm: centered_x(DOCUMENT_TITLE),
        y_mm: cursor_y,
    });
    cursor_y -= LINE_HEIGHT_MM;

    for employee in records {
        let line = report_line(employee);
        if cursor_y < BOTTOM_MARGIN_MM {
            pages.push(ReportPage::default());
            cursor_y = top;
        }

        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine {
                text: line,
                x_mm: MARGIN_MM,
                y_mm: cursor_y,
            });
        }
        cursor_y -= LINE_HEIGHT_MM;
    }

    Ok(pages)
}

/// Renders `records` as a PDF report.
pub fn export_pdf(records: &[Employee]) -> ExportResult<Vec<u8>> {
    let pages = layout_report(records)?;

    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ExportError::Pdf(err.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for line in &page.lines {
            layer.use_text(
                line.text.as_str(),
                FONT_SIZE_PT,
                Mm(line.x_mm),
                Mm(line.y_mm),
                &font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|err| ExportError::Pdf(err.to_string()))
}

fn is_latin1(ch: char) -> bool {
    u32::from(ch) <= 0xFF
}

fn centered_x(text: &str) -> f32 {
    let width = text.chars().count() as f32 * FONT_SIZE_PT * AVERAGE_GLYPH_EM * PT_TO_MM;
    MARGIN_MM + ((TITLE_CELL_WIDTH_MM - width) / 2.0).max(0.0)
}
