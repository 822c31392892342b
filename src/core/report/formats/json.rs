//! JSON report generator
//!
//! Writes the [`RecordSummary`](crate::core::summary::RecordSummary) with a
//! title wrapper so other tools can consume the figures directly.

use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::summary::RecordSummary;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    #[serde(flatten)]
    summary: &'a RecordSummary,
}

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let mut content = self.render(ctx)?;
        content.push('\n');
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            title: ctx.display_title(),
            summary: ctx.summary,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
