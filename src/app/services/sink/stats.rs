//! Writing statistics for output sinks

/// Statistics accumulated while writing records
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct WritingStats {
    /// Number of records accepted by the sink
    pub records_written: usize,
}

impl WritingStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}
