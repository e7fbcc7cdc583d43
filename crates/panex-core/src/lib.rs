use std::fmt;

pub mod backend;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};

/// Literal placeholder returned when a pattern fails to match,
/// distinguishing "no match" from an empty string.
pub const NOT_FOUND: &str = "Not found";

/// A single recognized field: either a value or the `"Not found"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Found(String),
    NotFound,
}

impl FieldValue {
    /// The field text as it appears in output: the value itself, or the
    /// literal sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Found(v) => v,
            FieldValue::NotFound => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FieldValue::Found(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The name/PAN pair recognized from one document.
///
/// Immutable once produced; each field is either a whitespace-trimmed
/// value or the `"Not found"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanRecord {
    pub name: FieldValue,
    pub pan: FieldValue,
}

/// A recoverable fault from one extraction backend.
///
/// Faults are reported to the observability channel and carried alongside
/// results for presentation as status lines; they never surface as hard
/// failures on their own.
#[derive(Debug, Clone)]
pub struct ExtractionFault {
    /// Backend name, e.g. `"lopdf"`.
    pub backend: &'static str,
    pub message: String,
}

impl fmt::Display for ExtractionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} extraction failed: {}", self.backend, self.message)
    }
}
