use std::path::Path;

use lopdf::Document;

use panex_core::{BackendError, PdfBackend};

/// Primary extraction backend built on `lopdf`.
///
/// Pages are visited in document order and their text concatenated with no
/// separator. Any page that fails to decode fails the whole attempt; the
/// orchestrator treats that as a fault and moves on to the next backend
/// rather than returning partial text.
#[derive(Debug, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let document = Document::load(path).map_err(|e| BackendError::Open(e.to_string()))?;

        let mut text = String::new();
        for (page_number, _object_id) in document.get_pages() {
            let page_text = document
                .extract_text(&[page_number])
                .map_err(|e| BackendError::Extraction(e.to_string()))?;
            text.push_str(&page_text);
        }

        Ok(text)
    }
}
