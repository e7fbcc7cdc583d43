//! PDF text extraction backends.
//!
//! Two independent implementations of [`panex_core::PdfBackend`] with
//! different parsing heuristics, so that documents one library chokes on
//! can still be read by the other:
//!
//! - [`LopdfBackend`] walks pages with `lopdf` (primary)
//! - [`PdfExtractBackend`] delegates to `pdf-extract` (secondary)

pub mod lopdf_backend;
pub mod pdf_extract_backend;

pub use lopdf_backend::LopdfBackend;
pub use pdf_extract_backend::PdfExtractBackend;
