use std::path::Path;

use panex_core::{BackendError, PdfBackend};

/// Secondary extraction backend built on `pdf-extract`.
///
/// `pdf_extract::extract_text` walks every page in document order itself
/// and returns the concatenated result, so this backend is a thin shim
/// mapping its errors onto [`BackendError`]. Its layout heuristics differ
/// from lopdf's, which is exactly why it is worth trying after lopdf
/// comes back empty or fails.
#[derive(Debug, Default)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        pdf_extract::extract_text(path).map_err(|e| BackendError::Extraction(e.to_string()))
    }
}
