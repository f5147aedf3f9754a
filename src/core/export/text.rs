//! Plain-text summary export (clipboard format)

use super::{format_gpa, ExportContext, ExportGenerator};
use crate::core::error::ExportError;
use std::fmt::Write;

/// Plain-text summary exporter
pub struct TextExporter;

impl TextExporter {
    /// Create a new text exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportGenerator for TextExporter {
    fn render(&self, ctx: &ExportContext) -> Result<String, ExportError> {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "GPA Tracker - Academic Summary");
        let _ = writeln!(out, "==============================");
        let _ = writeln!(out, "University: {}", ctx.preset_name());
        let _ = writeln!(out, "Semester GPA: {}", format_gpa(ctx.weighted_gpa));
        let _ = writeln!(out, "Cumulative CGPA: {}", format_gpa(ctx.weighted_gpa));
        if ctx.semester_count > 0 {
            let _ = writeln!(
                out,
                "Semester History Average: {} ({} semesters)",
                format_gpa(ctx.semester_average),
                ctx.semester_count
            );
        }
        let _ = writeln!(out, "Total Credits: {:.1}", ctx.total_credits);
        let _ = writeln!(out);
        let _ = writeln!(out, "Subject Details:");
        for subject in ctx.subjects {
            let _ = writeln!(
                out,
                "{} | {:.1} cr | {} | {} GPA",
                subject.name(),
                subject.credit_hours(),
                subject.label(),
                format_gpa(subject.grade_point())
            );
        }
        let _ = writeln!(out);
        let _ = write!(out, "Generated: {}", ctx.date_label());
        Ok(out)
    }
}
