//! PDF report generator via HTML-to-PDF conversion
//!
//! Generates PDF reports by first creating an HTML report and then converting
//! it to PDF using headless Chrome/Chromium or another specified converter.
//! The HTML declares an A4 page size, so the browser splits a long record
//! across standard-width pages.

use super::html::HtmlReporter;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::debug;
use std::error::Error;
use std::path::Path;
use std::process::{Command, Stdio};

/// Environment variable naming a converter to use instead of auto-detection
pub const PDF_CONVERTER_ENV: &str = "CGPA_PDF_CONVERTER";

/// PDF report generator using HTML-to-PDF conversion
pub struct PdfReporter {
    /// Optional custom PDF converter command
    converter: Option<String>,
}

impl PdfReporter {
    /// Create a new PDF reporter
    ///
    /// Honors `$CGPA_PDF_CONVERTER` when it is set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            converter: std::env::var(PDF_CONVERTER_ENV)
                .ok()
                .filter(|c| !c.is_empty()),
        }
    }

    /// Create a PDF reporter with a custom converter
    #[must_use]
    pub fn with_converter(converter: &str) -> Self {
        Self {
            converter: Some(converter.to_owned()),
        }
    }

    /// Detect available Chrome/Chromium browser
    fn detect_chrome() -> Option<String> {
        let candidates = [
            "google-chrome",
            "chrome",
            "chromium",
            "chromium-browser",
            "google-chrome-stable",
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
            "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
        ];

        candidates.into_iter().find_map(|candidate| {
            Command::new(candidate)
                .arg("--version")
                .output()
                .ok()
                .filter(|output| output.status.success())
                .map(|_| candidate.to_owned())
        })
    }

    /// Generate PDF from HTML file using Chrome/Chromium
    fn html_to_pdf_chrome(
        chrome_cmd: &str,
        html_path: &Path,
        pdf_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        debug!("Converting {} with {chrome_cmd}", html_path.display());

        let status = Command::new(chrome_cmd)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--run-all-compositor-stages-before-draw")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.canonicalize()?.display()))
            .stderr(Stdio::null())
            .stdout(Stdio::null())
            .status()?;

        if !status.success() {
            return Err("Chrome PDF conversion failed".into());
        }

        Ok(())
    }

    /// Convert HTML report to PDF
    fn convert_html_to_pdf(&self, html_path: &Path, pdf_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(converter) = &self.converter {
            return Self::html_to_pdf_chrome(converter, html_path, pdf_path);
        }

        if let Some(chrome) = Self::detect_chrome() {
            return Self::html_to_pdf_chrome(&chrome, html_path, pdf_path);
        }

        Err("PDF conversion failed: Chrome/Chromium not found.\n\
            \n\
            To generate PDF reports, install Chrome or Chromium:\n\
            \n\
            • Ubuntu/Debian:  sudo apt install chromium-browser\n\
            • Fedora/RHEL:    sudo dnf install chromium\n\
            • macOS:          brew install --cask google-chrome\n\
            • Windows:        Download from https://www.google.com/chrome/\n\
            \n\
            Alternatively, point CGPA_PDF_CONVERTER at a Chrome binary.\n\
            "
        .into())
    }
}

impl Default for PdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PdfReporter {
    /// Generate PDF report via HTML-to-PDF conversion
    ///
    /// The intermediate HTML goes to the temp directory and is removed
    /// whether or not conversion succeeds.
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let html_path = std::env::temp_dir().join(format!(
            "cgpa_report_{}_{}.html",
            std::process::id(),
            uuid::Uuid::new_v4().simple()
        ));

        HtmlReporter::new().generate(ctx, &html_path)?;
        let result = self.convert_html_to_pdf(&html_path, output_path);
        let _ = std::fs::remove_file(&html_path);

        result
    }

    /// Render method for consistency with other reporters
    fn render(&self, _ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(String::from(
            "PDF reports are generated via HTML-to-PDF conversion.",
        ))
    }
}
