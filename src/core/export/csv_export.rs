//! CSV export
//!
//! A subject table followed by a `SUMMARY` block of aggregate rows.

use super::{format_gpa, ExportContext, ExportGenerator};
use crate::core::error::ExportError;

/// Header row of the subject table
pub const CSV_HEADER: [&str; 5] = ["Subject Name", "Credit Hours", "Grade", "GPA", "Mode"];

/// CSV exporter
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new CSV exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn subject_table(ctx: &ExportContext) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for subject in ctx.subjects {
            writer.write_record([
                subject.name().to_string(),
                subject.credit_hours().to_string(),
                subject.label().to_string(),
                format_gpa(subject.grade_point()),
                subject.mode().to_string(),
            ])?;
        }
        writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
    }

    fn summary_block(ctx: &ExportContext) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        writer.write_record(["SUMMARY"])?;
        writer.write_record(["Total Credits".to_string(), format!("{:.1}", ctx.total_credits)])?;
        writer.write_record(["Semester GPA".to_string(), format_gpa(ctx.weighted_gpa)])?;
        writer.write_record(["Cumulative CGPA".to_string(), format_gpa(ctx.weighted_gpa)])?;
        if ctx.semester_count > 0 {
            writer.write_record([
                "Semester History Average".to_string(),
                format_gpa(ctx.semester_average),
            ])?;
        }
        writer.write_record(["University", ctx.preset_name()])?;
        writer.write_record(["Export Date".to_string(), ctx.date_label()])?;
        writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportGenerator for CsvExporter {
    fn render(&self, ctx: &ExportContext) -> Result<String, ExportError> {
        let mut bytes = Self::subject_table(ctx)?;
        bytes.push(b'\n');
        bytes.extend(Self::summary_block(ctx)?);
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::GradeInput;
    use crate::core::roster::Roster;
    use crate::core::scale::default_preset;
    use chrono::NaiveDate;

    fn roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .add_subject(
                "Logic, Sets",
                3.0,
                GradeInput::Letter("A".to_string()),
                default_preset(),
            )
            .unwrap();
        roster
            .add_subject("Lab", 1.5, GradeInput::Percentage(66.0), default_preset())
            .unwrap();
        roster
    }

    fn context(roster: &Roster, semester_count: usize) -> ExportContext<'_> {
        ExportContext {
            subjects: roster.subjects(),
            preset: default_preset(),
            weighted_gpa: roster.weighted_average(),
            total_credits: roster.total_credits(),
            semester_average: 3.25,
            semester_count,
            exported_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_csv_layout() {
        let roster = roster();
        let out = CsvExporter::new().render(&context(&roster, 0)).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Subject Name,Credit Hours,Grade,GPA,Mode");
        assert_eq!(lines[1], "\"Logic, Sets\",3,A,3.75,letter");
        assert_eq!(lines[2], "Lab,1.5,B+,3.25,percentage");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "SUMMARY");
        assert_eq!(lines[5], "Total Credits,4.5");
        assert!(lines.contains(&"University,UGC Standard"));
        assert!(lines.contains(&"Export Date,2024-05-01"));
        assert!(!out.contains("Semester History Average"));
    }

    #[test]
    fn test_semester_history_row_when_present() {
        let roster = roster();
        let out = CsvExporter::new().render(&context(&roster, 2)).unwrap();
        assert!(out.contains("Semester History Average,3.25"));
    }
}
