//! Per-record transform application

use tracing::debug;

use crate::app::models::Person;
use crate::config::Transform;

/// Processor applying the configured transform to parsed records
///
/// # Example
///
/// ```rust
/// use roster_importer::app::models::Person;
/// use roster_importer::app::services::record_processor::RecordProcessor;
/// use roster_importer::config::Transform;
///
/// let processor = RecordProcessor::new(Transform::UppercaseNames);
/// let person = processor.process(Person::new("1", "John", "Doe", "123 Main St"));
/// assert_eq!(person.first_name, "JOHN");
/// ```
#[derive(Debug, Clone)]
pub struct RecordProcessor {
    transform: Transform,
}

impl RecordProcessor {
    /// Create a processor with the given transform
    pub fn new(transform: Transform) -> Self {
        Self { transform }
    }

    /// Apply the configured transform to one record
    pub fn process(&self, person: Person) -> Person {
        match self.transform {
            Transform::None => person,
            Transform::UppercaseNames => {
                let transformed = Person {
                    first_name: person.first_name.to_uppercase(),
                    last_name: person.last_name.to_uppercase(),
                    ..person
                };
                debug!(
                    "Upper-cased names for record {}: {} {}",
                    transformed.id, transformed.first_name, transformed.last_name
                );
                transformed
            }
        }
    }

    /// The transform this processor applies
    pub fn transform(&self) -> Transform {
        self.transform
    }
}
