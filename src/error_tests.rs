//! Tests for DeskError type

use super::*;

#[test]
fn test_no_data_source_error_display() {
    let error = DeskError::NoDataSource;
    let msg = error.to_string();
    assert!(msg.contains("No directory source"));
    assert!(msg.contains("--data"));
}

#[test]
fn test_invalid_data_error_display() {
    let error = DeskError::InvalidData("expected `,` at line 3".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid directory data"));
    assert!(msg.contains("line 3"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = DeskError::from(io_err);
    assert!(matches!(err, DeskError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_api_error_is_transparent() {
    let err = DeskError::from(ApiError::Unauthorized);
    assert_eq!(err.to_string(), ApiError::Unauthorized.to_string());
}

#[test]
fn test_error_debug() {
    let error = DeskError::NoDataSource;
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("NoDataSource"));
}
