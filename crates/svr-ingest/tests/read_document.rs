//! Integration tests for reading observation documents from disk.

use std::io::Write;
use std::path::Path;

use svr_ingest::{
    DocumentFormat, IngestError, check_file_size_with_limit, read_document, read_document_as,
};
use svr_model::RawObservation;
use tempfile::{NamedTempFile, TempDir};

const XML: &str = "\u{feff}<?xml version=\"1.0\"?>\n<dataset>\n  <observation>\n    \
    <criterion>A</criterion>\n    <predictor><label>x1</label><value>0.5</value></predictor>\n  \
    </observation>\n</dataset>\n";

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_xml_with_bom() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "observations.xml", XML);
    let document = read_document(&path).unwrap();
    assert_eq!(document.observations, vec![RawObservation::new("A", [("x1", "0.5")])]);
}

#[test]
fn reads_json() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "observations.json",
        r#"{"dataset": {"observation": [{"criterion": "A", "predictor": [{"label": "x1", "value": 0.5}]}]}}"#,
    );
    let document = read_document(&path).unwrap();
    assert_eq!(document.observations, vec![RawObservation::new("A", [("x1", "0.5")])]);
}

#[test]
fn explicit_format_ignores_extension() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "<dataset/>").unwrap();
    let document = read_document_as(file.path(), DocumentFormat::Xml).unwrap();
    assert!(document.is_empty());
}

#[test]
fn missing_file_is_reported() {
    let result = read_document(Path::new("/nonexistent/observations.xml"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "observations.csv", "a,b");
    assert!(matches!(
        read_document(&path),
        Err(IngestError::UnsupportedFormat { .. })
    ));
}

#[test]
fn size_limit_is_enforced() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "observations.xml", XML);
    let result = check_file_size_with_limit(&path, 8);
    assert!(matches!(
        result,
        Err(IngestError::FileTooLarge { max_size: 8, .. })
    ));
    assert!(check_file_size_with_limit(&path, 1024).is_ok());
}

#[test]
fn file_can_be_replaced_after_reading() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "observations.xml", "<dataset/>");
    read_document(&path).unwrap();
    // the handle is closed, so the file can be removed and rewritten
    std::fs::remove_file(&path).unwrap();
    std::fs::write(&path, XML).unwrap();
    assert_eq!(read_document(&path).unwrap().len(), 1);
}
