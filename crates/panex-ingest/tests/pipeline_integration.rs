//! End-to-end pipeline tests against real generated PDFs.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::path::Path;

/// Write a one-page PDF showing each line as a separate text object.
fn write_pdf(path: &Path, lines: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new(
            "Td",
            vec![72.into(), (720 - 20 * i as i64).into()],
        ));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode content stream"),
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => Object::from(resources_id),
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("save test PDF");
}

#[test]
fn extracts_name_and_pan_from_generated_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.pdf");
    // PAN line first so the greedy name capture only has trailing
    // whitespace to absorb.
    write_pdf(&path, &["PAN: ABCDE1234F", "Name John Smith"]);

    let extraction = panex_ingest::extract_pan_details(&path).unwrap();
    assert_eq!(extraction.record.pan.as_str(), "ABCDE1234F");
    assert_eq!(extraction.record.name.as_str(), "John Smith");
}

#[test]
fn fields_default_to_sentinel_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank-ish.pdf");
    write_pdf(&path, &["unrelated content only"]);

    let extraction = panex_ingest::extract_pan_details(&path).unwrap();
    assert_eq!(extraction.record.pan.as_str(), "Not found");
    assert_eq!(extraction.record.name.as_str(), "Not found");
}

#[test]
fn unreadable_file_exhausts_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bogus.pdf");
    std::fs::write(&path, b"not a pdf at all").unwrap();

    let err = panex_ingest::extract_pan_details(&path).unwrap_err();
    let panex_ingest::IngestError::ExtractionExhausted { faults } = err;
    // Both real backends reported a fault.
    assert!(!faults.is_empty());
}
