//! Tests for the persistence adapter
//!
//! These tests verify:
//! - Missing and blank files load as empty collections
//! - Save/load round-trips preserve records and order
//! - The on-disk format is an indented JSON array
//! - Malformed content surfaces as a serialization error

use std::fs;
use std::path::PathBuf;

use student_records::store::{load, save};
use student_records::{RecordsError, StudentRecord};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("student_records.json");
    (temp_dir, path)
}

fn sample_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new("Ada", "Mathematics", 91),
        StudentRecord::new("Grace", "Computing", 100),
        StudentRecord::new("Ada", "Physics", 0),
    ]
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file() {
    let (_temp, path) = setup_temp_file();

    let records = load(&path).unwrap();

    assert!(records.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_load_empty_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "").unwrap();

    assert!(load(&path).unwrap().is_empty());
}

#[test]
fn test_load_whitespace_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "  \n\t\n").unwrap();

    assert!(load(&path).unwrap().is_empty());
}

#[test]
fn test_load_malformed_file() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "{ not json").unwrap();

    let result = load(&path);

    assert!(matches!(result, Err(RecordsError::Serialization(_))));
}

#[test]
fn test_load_wrong_shape() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, r#"{"name": "Ada", "subject": "Maths", "grade": 90}"#).unwrap();

    assert!(matches!(load(&path), Err(RecordsError::Serialization(_))));
}

#[test]
fn test_load_does_not_revalidate() {
    let (_temp, path) = setup_temp_file();
    fs::write(
        &path,
        r#"[{"name": "mary-jane", "subject": "art 2", "grade": 150}]"#,
    )
    .unwrap();

    let records = load(&path).unwrap();

    assert_eq!(records, vec![StudentRecord::new("mary-jane", "art 2", 150)]);
}

#[test]
fn test_load_keeps_out_of_range_grades() {
    let (_temp, path) = setup_temp_file();
    fs::write(
        &path,
        r#"[{"name": "Ada", "subject": "Art", "grade": -5},
            {"name": "Bob", "subject": "Art", "grade": 300}]"#,
    )
    .unwrap();

    let records = load(&path).unwrap();

    assert_eq!(
        records,
        vec![
            StudentRecord::new("Ada", "Art", -5),
            StudentRecord::new("Bob", "Art", 300),
        ]
    );
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_load_roundtrip() {
    let (_temp, path) = setup_temp_file();
    let records = sample_records();

    save(&path, &records).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_save_empty_collection() {
    let (_temp, path) = setup_temp_file();

    save(&path, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    assert!(load(&path).unwrap().is_empty());
}

#[test]
fn test_save_overwrites() {
    let (_temp, path) = setup_temp_file();

    save(&path, &sample_records()).unwrap();
    save(&path, &[StudentRecord::new("Linus", "Systems", 77)]).unwrap();

    assert_eq!(
        load(&path).unwrap(),
        vec![StudentRecord::new("Linus", "Systems", 77)]
    );
}

#[test]
fn test_save_format_is_indented_array() {
    let (_temp, path) = setup_temp_file();

    save(&path, &[StudentRecord::new("Ada", "Mathematics", 91)]).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    let expected = "[\n    {\n        \"name\": \"Ada\",\n        \"subject\": \"Mathematics\",\n        \"grade\": 91\n    }\n]\n";
    assert_eq!(content, expected);
}

#[test]
fn test_save_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("records.json");

    save(&path, &sample_records()).unwrap();

    assert_eq!(load(&path).unwrap(), sample_records());
}
