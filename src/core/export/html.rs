//! Printable HTML summary
//!
//! Rendered through an askama template (`templates/summary.html`), which escapes
//! subject names.

use super::{format_gpa, ExportContext, ExportGenerator};
use crate::core::error::ExportError;
use askama::Template;

/// One table row of the HTML summary
struct HtmlRow {
    name: String,
    credits: String,
    label: String,
    gpa: String,
    points: String,
}

#[derive(Template)]
#[template(path = "summary.html")]
struct SummaryPage {
    preset_name: &'static str,
    semester_gpa: String,
    cumulative: String,
    total_credits: String,
    has_history: bool,
    semester_history: String,
    generated: String,
    rows: Vec<HtmlRow>,
}

/// HTML summary exporter
pub struct HtmlExporter;

impl HtmlExporter {
    /// Create a new HTML exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportGenerator for HtmlExporter {
    fn render(&self, ctx: &ExportContext) -> Result<String, ExportError> {
        let rows = ctx
            .subjects
            .iter()
            .map(|subject| HtmlRow {
                name: subject.name().to_string(),
                credits: format!("{:.1}", subject.credit_hours()),
                label: subject.label().to_string(),
                gpa: format_gpa(subject.grade_point()),
                points: format_gpa(subject.grade_points()),
            })
            .collect();

        let page = SummaryPage {
            preset_name: ctx.preset_name(),
            semester_gpa: format_gpa(ctx.weighted_gpa),
            cumulative: format_gpa(ctx.weighted_gpa),
            total_credits: format!("{:.1}", ctx.total_credits),
            has_history: ctx.semester_count > 0,
            semester_history: format_gpa(ctx.semester_average),
            generated: ctx.date_label(),
            rows,
        };
        Ok(page.render()?)
    }
}
