use catalog::CatalogError;
use std::error::Error;
use std::io;

#[test]
fn test_error_display() {
    let parse_error = CatalogError::ParseError("Invalid category: hats".to_string());
    assert_eq!(format!("{}", parse_error), "Parse error: Invalid category: hats");

    let io_error = CatalogError::IoError(io::Error::new(io::ErrorKind::NotFound, "File not found"));
    assert!(format!("{}", io_error).contains("IO error"));
    assert!(format!("{}", io_error).contains("File not found"));

    let format_error = CatalogError::UnsupportedFormat("toml".to_string());
    let msg = format!("{}", format_error);
    assert!(msg.contains("'toml'"));
    assert!(msg.contains(".json"));
    assert!(msg.contains(".csv"));

    let dup = CatalogError::DuplicateId("7".to_string());
    assert_eq!(format!("{}", dup), "Duplicate product id: 7");
}

#[test]
fn test_error_conversions_and_sources() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let err: CatalogError = json_error.into();
    assert!(matches!(err, CatalogError::SerdeJsonError(_)));
    assert!(err.source().is_some());

    let csv_error = csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, "CSV error"));
    let err: CatalogError = csv_error.into();
    assert!(matches!(err, CatalogError::CsvError(_)));

    assert!(CatalogError::DuplicateId("1".to_string()).source().is_none());
}
