use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level text extraction step: open the
/// document, walk pages in document order, and concatenate per-page text
/// with no separator (a page that yields nothing contributes an empty
/// string). The fallback orchestration across backends lives in
/// `panex-ingest`.
pub trait PdfBackend: Send + Sync {
    /// Short stable name used in fault reports and logs.
    fn name(&self) -> &'static str;

    /// Extract the full text content of a PDF file.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
