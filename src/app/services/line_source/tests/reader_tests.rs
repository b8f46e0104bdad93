//! Tests for roster file reading and ordinal assignment

use crate::app::services::line_source::LineSource;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_header_consumed_and_ordinals_count_it() {
    let file = write_temp_file("id,first,last,address\n1,John,Doe,123 Main St\n2,Jane,Doe,5 Elm\n");
    let loaded = LineSource::new(true).load(file.path()).unwrap();

    assert_eq!(loaded.header.as_deref(), Some("id,first,last,address"));
    assert_eq!(loaded.lines.len(), 2);
    assert_eq!(loaded.first_record_line, 2);
    assert_eq!(loaded.lines[0].number, 2);
    assert_eq!(loaded.lines[0].text, "1,John,Doe,123 Main St");
    assert_eq!(loaded.lines[1].number, 3);
}

#[test]
fn test_no_header_mode_keeps_first_line() {
    let file = write_temp_file("1,John,Doe,123 Main St\n");
    let loaded = LineSource::new(false).load(file.path()).unwrap();

    assert!(loaded.header.is_none());
    assert_eq!(loaded.first_record_line, 1);
    assert_eq!(loaded.lines[0].number, 1);
}

#[test]
fn test_expected_records_excludes_header() {
    let file = write_temp_file("header\na\nb\nc\n");
    let loaded = LineSource::new(true).load(file.path()).unwrap();
    assert_eq!(loaded.expected_records(), 3);
}

#[test]
fn test_crlf_terminators_stripped() {
    let file = write_temp_file("header\r\n1,John,Doe,123 Main St\r\n");
    let loaded = LineSource::new(true).load(file.path()).unwrap();
    assert_eq!(loaded.lines[0].text, "1,John,Doe,123 Main St");
}

#[test]
fn test_unbalanced_quotes_never_merge_lines() {
    // Three physical lines stay three raw lines no matter the quote balance
    let file = write_temp_file("header\nline2 \"data1\",\"\"Data2\"\n3,Jane,Doe,5 Elm\n");
    let loaded = LineSource::new(true).load(file.path()).unwrap();

    assert_eq!(loaded.lines.len(), 2);
    assert_eq!(loaded.lines[0].text, "line2 \"data1\",\"\"Data2\"");
    assert_eq!(loaded.lines[1].text, "3,Jane,Doe,5 Elm");
}

#[test]
fn test_empty_file_yields_no_lines() {
    let file = write_temp_file("");
    let loaded = LineSource::new(true).load(file.path()).unwrap();
    assert!(loaded.header.is_none());
    assert!(loaded.lines.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let result = LineSource::new(true).load(std::path::Path::new("/nonexistent/roster.csv"));
    assert!(matches!(result, Err(crate::Error::Io { .. })));
}
