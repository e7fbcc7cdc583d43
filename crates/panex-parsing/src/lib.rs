//! Field recognition over unstructured extracted text.
//!
//! Two fixed lexical patterns, evaluated independently against the full
//! text with no cross-validation. Absence of a match is a normal outcome
//! signaled via [`FieldValue::NotFound`], never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use panex_core::{FieldValue, PanRecord};

/// PAN shape: 5 uppercase letters, 4 digits, 1 uppercase letter. A single
/// whitespace character is tolerated after the letter run and/or after the
/// digit run, because PDF extractors sometimes render a spurious space
/// inside the code.
static PAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{5}\s?[0-9]{4}\s?[A-Z]").unwrap());

/// The literal `Name` label, optional whitespace, then a greedy run of
/// Latin letters and whitespace. The capture has no upper bound and no
/// stop-word list, so trailing boilerplate that happens to be
/// letters/whitespace is absorbed.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Name\s*([A-Za-z\s]+)").unwrap());

/// Locate the holder name and PAN in extracted text.
///
/// The leftmost PAN match wins; no checksum validation is applied. All
/// whitespace is stripped from the matched PAN span, and the captured name
/// is trimmed at both ends. Deterministic given identical input.
pub fn recognize_fields(text: &str) -> PanRecord {
    let pan = PAN_RE.find(text).map(|m| {
        m.as_str()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
    });

    let name = NAME_RE
        .captures(text)
        .map(|caps| caps.get(1).unwrap().as_str().trim().to_string());

    PanRecord {
        name: name.map(FieldValue::Found).unwrap_or(FieldValue::NotFound),
        pan: pan.map(FieldValue::Found).unwrap_or(FieldValue::NotFound),
    }
}
