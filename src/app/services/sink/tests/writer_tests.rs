//! Tests for record serialization across sink formats

use super::sample_people;
use crate::app::models::Person;
use crate::app::services::sink::{RecordSink, SinkFormat};
use tempfile::TempDir;

fn write_all(format: SinkFormat, people: &[Person]) -> (TempDir, String, usize) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out");

    let mut sink = RecordSink::create(format, Some(&path)).unwrap();
    for person in people {
        sink.write(person).unwrap();
    }
    let stats = sink.finalize().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    (dir, content, stats.records_written)
}

#[test]
fn test_csv_sink_writes_header_and_quotes_canonically() {
    let (_dir, content, written) = write_all(SinkFormat::Csv, &sample_people());

    assert_eq!(written, 2);
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("id,first_name,last_name,address"));
    assert_eq!(lines.next(), Some("1,John,Doe,123 Main St"));
    // Embedded quote and separator come back out canonically escaped
    assert_eq!(lines.next(), Some(r#"2,"O""Brien",Smith,"1 A St, Apt 2""#));
}

#[test]
fn test_csv_round_trips_through_csv_reader() {
    let people = sample_people();
    let (_dir, content, _) = write_all(SinkFormat::Csv, &people);

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let parsed: Vec<Person> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(parsed, people);
}

#[test]
fn test_jsonl_sink_one_object_per_line() {
    let people = sample_people();
    let (_dir, content, written) = write_all(SinkFormat::JsonLines, &people);

    assert_eq!(written, 2);
    let parsed: Vec<Person> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, people);
}

#[test]
fn test_console_sink_contains_all_fields() {
    colored::control::set_override(false);
    let (_dir, content, _) = write_all(SinkFormat::Console, &sample_people());

    assert!(content.contains("John"));
    assert!(content.contains("1 A St, Apt 2"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_empty_sink_finalizes_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    let sink = RecordSink::create(SinkFormat::Csv, Some(&path)).unwrap();
    let stats = sink.finalize().unwrap();
    assert_eq!(stats.records_written, 0);
}
