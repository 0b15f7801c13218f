//! Word-processing document exporter.
//!
//! # Invariants
//! - The document opens with a level-1 heading titled [`DOCUMENT_TITLE`].
//! - Each record is one paragraph of `Label: value` lines.
//! - Text outside the XML 1.0 character set is rejected, not written.

use super::{ensure_encodable, ExportError, ExportFormat, ExportResult, DOCUMENT_TITLE};
use crate::model::employee::Employee;
use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use std::io::Cursor;

const HEADING_STYLE_ID: &str = "Heading1";
// Half-points.
const HEADING_SIZE: usize = 32;

/// Renders `records` as a DOCX document.
pub fn export_docx(records: &[Employee]) -> ExportResult<Vec<u8>> {
    ensure_encodable(ExportFormat::Docx, records, is_xml_char)?;

    let mut docx = Docx::new()
        .add_style(
            Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
                .name("Heading 1")
                .size(HEADING_SIZE)
                .bold(),
        )
        .add_paragraph(
            Paragraph::new()
                .style(HEADING_STYLE_ID)
                .add_run(Run::new().add_text(DOCUMENT_TITLE)),
        );

    for employee in records {
        docx = docx.add_paragraph(Paragraph::new().add_run(record_run(employee)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|err| ExportError::Docx(err.to_string()))?;
    Ok(buffer.into_inner())
}

fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

fn record_run(employee: &Employee) -> Run {
    let mut run = Run::new();
    let mut first_line = true;
    for (label, value) in employee.labeled_fields() {
        let text = format!("{label}: {value}");
        for line in text.lines() {
            if !first_line {
                run = run.add_break(BreakType::TextWrapping);
            }
            run = run.add_text(line);
            first_line = false;
        }
    }
    run
}

#[cfg(test)]
mod tests {
    use super::is_xml_char;

    #[test]
    fn xml_char_set_excludes_control_characters_and_non_characters() {
        for ch in ['\t', '\n', '\r', ' ', 'é', '\u{D7FF}', '\u{E000}', '\u{1F600}'] {
            assert!(is_xml_char(ch), "{ch:?} should be allowed");
        }
        for ch in ['\u{0}', '\u{1}', '\u{B}', '\u{1F}', '\u{FFFE}', '\u{FFFF}'] {
            assert!(!is_xml_char(ch), "{ch:?} should be rejected");
        }
    }
}
