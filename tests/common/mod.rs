#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use aadhaar_report::{ReportGenerator, ReportInput};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text runs drawn on a one-based page, one entry per laid-out line.
    pub fn page_lines(&self, page: u32) -> Vec<String> {
        pdf_assertions::page_lines(&self.doc, page)
    }

    /// Text runs of every page in page order.
    pub fn all_lines(&self) -> Vec<String> {
        (1..=self.page_count() as u32).flat_map(|p| self.page_lines(p)).collect()
    }

    /// Lines of the pages between the executive summary and the conclusion.
    pub fn findings_lines(&self) -> Vec<String> {
        let last = self.page_count() as u32;
        (3..last).flat_map(|p| self.page_lines(p)).collect()
    }

    /// A string entry of the document information dictionary.
    pub fn info_entry(&self, key: &str) -> Option<String> {
        let info_id = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let dict = self.doc.get_dictionary(info_id).ok()?;
        lopdf::decode_text_string(dict.get(key.as_bytes()).ok()?).ok()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a report with the default configuration and the fixed fixture timestamp
pub fn generate_report(input: &ReportInput) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_report_with(&ReportGenerator::default(), input)
}

pub fn generate_report_with(
    generator: &ReportGenerator,
    input: &ReportInput,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = generator.generate_at(input, fixtures::generated_at())?;
    GeneratedPdf::from_bytes(bytes)
}
