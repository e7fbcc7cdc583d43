//! Fallback text extraction and the end-to-end extraction pipeline.
//!
//! Backends are tried in a fixed order and the first non-empty text wins.
//! No quality heuristic is applied to a successful result and outputs of
//! different backends are never merged. Backend faults are recoverable:
//! they are logged, collected for status display, and only surface as an
//! error once every backend has been exhausted.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;

use panex_pdf::{LopdfBackend, PdfExtractBackend};

// Re-export domain types for convenience
pub use panex_core::{ExtractionFault, FieldValue, NOT_FOUND, PanRecord, PdfBackend};

/// Text recovered from a PDF, plus any backend faults hit on the way.
#[derive(Debug)]
pub struct ExtractedText {
    /// Concatenated per-page text, in page order. Never empty.
    pub text: String,
    /// Faults from backends that failed before one succeeded, for
    /// presentation as human-readable status lines.
    pub faults: Vec<ExtractionFault>,
}

/// A recognized record plus the faults accumulated during extraction.
#[derive(Debug)]
pub struct PanExtraction {
    pub record: PanRecord,
    pub faults: Vec<ExtractionFault>,
}

#[derive(Error, Debug)]
pub enum IngestError {
    /// Every backend produced empty output or failed. Terminal: the caller
    /// must stop the pipeline and report the failure; no field result
    /// exists.
    #[error("text extraction failed: no backend produced any text")]
    ExtractionExhausted { faults: Vec<ExtractionFault> },
}

impl IngestError {
    pub fn faults(&self) -> &[ExtractionFault] {
        match self {
            IngestError::ExtractionExhausted { faults } => faults,
        }
    }
}

/// The default backend chain: lopdf first, pdf-extract as fallback.
pub fn default_backends() -> Vec<Box<dyn PdfBackend>> {
    vec![
        Box::new(LopdfBackend::new()),
        Box::new(PdfExtractBackend::new()),
    ]
}

/// Extract text from a PDF using the default backend chain.
pub fn extract_text(path: &Path) -> Result<ExtractedText, IngestError> {
    extract_text_with_backends(path, &default_backends())
}

/// Extract text from a PDF, trying each backend in order.
///
/// The first backend to return non-empty text wins and its output is
/// returned verbatim. Errors and panics (some PDF crates panic on
/// malformed input) are caught at this boundary, reported via
/// `tracing::warn!`, and recorded as [`ExtractionFault`]s; a backend that
/// merely returns empty text falls through without a fault entry.
pub fn extract_text_with_backends(
    path: &Path,
    backends: &[Box<dyn PdfBackend>],
) -> Result<ExtractedText, IngestError> {
    let mut faults = Vec::new();

    for backend in backends {
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| backend.extract_text(path)));
        match attempt {
            Ok(Ok(text)) if !text.is_empty() => {
                return Ok(ExtractedText { text, faults });
            }
            Ok(Ok(_)) => {
                tracing::debug!(backend = backend.name(), "no text in document, falling back");
            }
            Ok(Err(e)) => {
                tracing::warn!(backend = backend.name(), error = %e, "extraction failed");
                faults.push(ExtractionFault {
                    backend: backend.name(),
                    message: e.to_string(),
                });
            }
            Err(payload) => {
                let message = panic_message(payload);
                tracing::warn!(backend = backend.name(), error = %message, "extraction panicked");
                faults.push(ExtractionFault {
                    backend: backend.name(),
                    message,
                });
            }
        }
    }

    Err(IngestError::ExtractionExhausted { faults })
}

/// End-to-end pipeline: extract text with fallback, then recognize the
/// name and PAN fields.
///
/// The recognizer only runs on non-empty extracted text; when extraction
/// is exhausted no record is produced and the error is returned instead.
pub fn extract_pan_details(path: &Path) -> Result<PanExtraction, IngestError> {
    let extracted = extract_text(path)?;
    let record = panex_parsing::recognize_fields(&extracted.text);
    Ok(PanExtraction {
        record,
        faults: extracted.faults,
    })
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panex_core::BackendError;

    /// Scripted backend for orchestrator tests.
    enum MockOutcome {
        Text(&'static str),
        Error(&'static str),
        Panic,
    }

    struct MockBackend {
        name: &'static str,
        outcome: MockOutcome,
    }

    impl PdfBackend for MockBackend {
        fn name(&self) -> &'static str {
            self.name
        }

        fn extract_text(&self, _path: &Path) -> Result<String, BackendError> {
            match &self.outcome {
                MockOutcome::Text(t) => Ok((*t).to_string()),
                MockOutcome::Error(msg) => Err(BackendError::Extraction((*msg).to_string())),
                MockOutcome::Panic => panic!("backend blew up"),
            }
        }
    }

    fn chain(outcomes: Vec<(&'static str, MockOutcome)>) -> Vec<Box<dyn PdfBackend>> {
        outcomes
            .into_iter()
            .map(|(name, outcome)| {
                Box::new(MockBackend { name, outcome }) as Box<dyn PdfBackend>
            })
            .collect()
    }

    #[test]
    fn test_primary_result_wins() {
        let backends = chain(vec![
            ("primary", MockOutcome::Text("primary text")),
            ("secondary", MockOutcome::Text("secondary text")),
        ]);
        let extracted =
            extract_text_with_backends(Path::new("x.pdf"), &backends).unwrap();
        assert_eq!(extracted.text, "primary text");
        assert!(extracted.faults.is_empty());
    }

    #[test]
    fn test_fallback_on_empty_primary() {
        let backends = chain(vec![
            ("primary", MockOutcome::Text("")),
            ("secondary", MockOutcome::Text("secondary text")),
        ]);
        let extracted =
            extract_text_with_backends(Path::new("x.pdf"), &backends).unwrap();
        // The pipeline's text equals the secondary output exactly.
        assert_eq!(extracted.text, "secondary text");
        // Empty output is a normal fall-through, not a fault.
        assert!(extracted.faults.is_empty());
    }

    #[test]
    fn test_fallback_on_primary_error_records_fault() {
        let backends = chain(vec![
            ("primary", MockOutcome::Error("bad xref")),
            ("secondary", MockOutcome::Text("recovered")),
        ]);
        let extracted =
            extract_text_with_backends(Path::new("x.pdf"), &backends).unwrap();
        assert_eq!(extracted.text, "recovered");
        assert_eq!(extracted.faults.len(), 1);
        assert_eq!(extracted.faults[0].backend, "primary");
        assert!(extracted.faults[0].message.contains("bad xref"));
    }

    #[test]
    fn test_panic_is_contained_as_fault() {
        let backends = chain(vec![
            ("primary", MockOutcome::Panic),
            ("secondary", MockOutcome::Text("recovered")),
        ]);
        let extracted =
            extract_text_with_backends(Path::new("x.pdf"), &backends).unwrap();
        assert_eq!(extracted.text, "recovered");
        assert_eq!(extracted.faults.len(), 1);
        assert!(extracted.faults[0].message.contains("blew up"));
    }

    #[test]
    fn test_exhausted_when_all_empty_or_failed() {
        let backends = chain(vec![
            ("primary", MockOutcome::Error("bad xref")),
            ("secondary", MockOutcome::Text("")),
        ]);
        let err =
            extract_text_with_backends(Path::new("x.pdf"), &backends).unwrap_err();
        let IngestError::ExtractionExhausted { faults } = err;
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].backend, "primary");
    }

    #[test]
    fn test_no_quality_heuristic_on_nonempty_primary() {
        // A one-byte result still wins; the fallback must not run.
        let backends = chain(vec![
            ("primary", MockOutcome::Text("x")),
            ("secondary", MockOutcome::Panic),
        ]);
        let extracted =
            extract_text_with_backends(Path::new("x.pdf"), &backends).unwrap();
        assert_eq!(extracted.text, "x");
    }
}
