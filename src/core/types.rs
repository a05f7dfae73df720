use serde::{Deserialize, Serialize};

/// One observation in a chart's data series.
///
/// Ordering of records is significant: the index drives x placement in every
/// sequential chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub note: String,
}

impl Record {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            note: String::new(),
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Returns `(min, max)` over record values.
///
/// Empty input yields `(f64::MAX, f64::MIN)`, the same sentinels the readers
/// start from before seeing any row.
#[must_use]
pub fn value_bounds(records: &[Record]) -> (f64, f64) {
    records
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), record| {
            (min.min(record.value), max.max(record.value))
        })
}
