//! Tests for per-record transforms

use crate::app::models::Person;
use crate::app::services::record_processor::RecordProcessor;
use crate::config::Transform;

#[test]
fn test_none_transform_is_passthrough() {
    let processor = RecordProcessor::new(Transform::None);
    let person = Person::new("1", "John", "Doe", "123 Main St");
    assert_eq!(processor.process(person.clone()), person);
}

#[test]
fn test_uppercase_transform_touches_only_names() {
    let processor = RecordProcessor::new(Transform::UppercaseNames);
    let person = processor.process(Person::new("1", "John", "Doe", "123 Main St"));

    assert_eq!(person.id, "1");
    assert_eq!(person.first_name, "JOHN");
    assert_eq!(person.last_name, "DOE");
    assert_eq!(person.address, "123 Main St");
}

#[test]
fn test_uppercase_handles_non_ascii_names() {
    let processor = RecordProcessor::new(Transform::UppercaseNames);
    let person = processor.process(Person::new("3", "søren", "kierkegård", "Nytorv 2"));

    assert_eq!(person.first_name, "SØREN");
    assert_eq!(person.last_name, "KIERKEGÅRD");
}
