//! CSV import for subject rows
//!
//! Splits CSV text into raw `ImportRow`s. Validation and grade resolution happen when
//! the rows are fed to the tracker.

use std::error::Error;
use std::fs;
use std::path::Path;

/// Header aliases for the subject name column
pub const NAME_ALIASES: &[&str] = &["subject", "name", "course"];
/// Header aliases for the credit-hours column
pub const CREDIT_ALIASES: &[&str] = &["credit", "credits", "hour", "hours"];
/// Header aliases for the grade value column
pub const VALUE_ALIASES: &[&str] = &["grade", "mark", "marks", "gpa", "percentage"];

/// One data row, before validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportRow {
    /// Subject name text
    pub name: String,
    /// Credit-hours text
    pub credit_text: String,
    /// Grade value text (letter, percentage or GPA)
    pub value_text: String,
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    /// Rows added to the roster
    pub imported: usize,
    /// Rows rejected by validation
    pub errors: usize,
}

/// Parse CSV text with a header row into import rows
///
/// Header names are matched case-insensitively against the alias lists; for each
/// column kind the first alias with a non-empty value wins. Rows with fewer fields
/// than the header are skipped.
///
/// # Errors
/// Returns an error if the text is not readable as CSV
pub fn parse_import_csv(text: &str) -> Result<Vec<ImportRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.trim().as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(str::to_lowercase)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < headers.len() {
            continue;
        }
        let field = |aliases: &[&str]| -> String {
            aliases
                .iter()
                .filter_map(|alias| headers.iter().position(|h| h == alias))
                .filter_map(|idx| record.get(idx))
                .find(|value| !value.is_empty())
                .unwrap_or_default()
                .to_string()
        };
        rows.push(ImportRow {
            name: field(NAME_ALIASES),
            credit_text: field(CREDIT_ALIASES),
            value_text: field(VALUE_ALIASES),
        });
    }
    Ok(rows)
}

/// Read and parse an import CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn parse_import_file<P: AsRef<Path>>(path: P) -> Result<Vec<ImportRow>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_import_csv(&content)?)
}
