//! CSV export of a recognized record.
//!
//! One header row (`Name,PAN`), one data row, no index column. File
//! naming and MIME type are owned by the caller (CLI `--output` path or
//! the web download response).

use panex_core::PanRecord;

/// Quote a CSV field when it contains a quote, comma, or newline.
fn csv_escape(s: &str) -> String {
    if s.contains('"') || s.contains(',') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Serialize a record as CSV. Sentinel fields are written literally as
/// `Not found`, so a row always exists once recognition has run.
pub fn to_csv(record: &PanRecord) -> String {
    let mut out = String::from("Name,PAN\n");
    out.push_str(&format!(
        "{},{}\n",
        csv_escape(record.name.as_str()),
        csv_escape(record.pan.as_str())
    ));
    out
}
