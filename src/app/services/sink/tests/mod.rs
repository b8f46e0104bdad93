//! Tests for the sink module

pub mod writer_tests;

use crate::app::models::Person;

/// A pair of representative records, one needing CSV quoting
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("1", "John", "Doe", "123 Main St"),
        Person::new("2", "O\"Brien", "Smith", "1 A St, Apt 2"),
    ]
}
