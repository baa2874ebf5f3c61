use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::directory::types::CourierStatus;

const SAMPLE: &str = r#"{
    "branches": [{"branchName": "Pune", "branchCode": "PN01", "email": "pune@x.com"}],
    "users": [{"name": "Asha Rao", "email": "asha@x.com", "role": "admin"}],
    "departments": [{"name": "Accounts"}],
    "couriers": [
        {"trackingNumber": "TRK-1", "destination": "Pune", "status": "in_transit"},
        {"trackingNumber": "TRK-2", "createdAt": "2024-03-01T10:00:00Z"}
    ]
}"#;

#[test]
fn test_parse_full_directory() {
    let directory = parse_directory(SAMPLE).unwrap();

    assert_eq!(directory.branches.len(), 1);
    assert_eq!(directory.branches[0].branch_code, "PN01");
    assert_eq!(directory.users[0].role, "admin");
    assert_eq!(directory.departments[0].name, "Accounts");
    assert_eq!(directory.couriers[0].status, CourierStatus::InTransit);
    assert_eq!(directory.couriers[1].status, CourierStatus::Pending);
    assert!(directory.couriers[1].created_at.is_some());
}

#[test]
fn test_missing_fields_default_to_empty() {
    let directory = parse_directory(r#"{"branches": [{"branchName": "Nashik"}], "users": [{}]}"#).unwrap();

    assert_eq!(directory.branches[0].email, "");
    assert_eq!(directory.branches[0].branch_code, "");
    assert_eq!(directory.users[0].name, "");
    assert!(directory.departments.is_empty());
}

#[test]
fn test_invalid_json_is_reported() {
    let err = parse_directory("{ not json").unwrap_err();
    assert!(matches!(err, DeskError::InvalidData(_)));
}

#[test]
fn test_load_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let directory = load_from_path(file.path()).unwrap();
    assert_eq!(directory.couriers.len(), 2);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, DeskError::Io(_)));
}
