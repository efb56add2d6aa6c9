//! ## sikt-core::accumulator
//! **Order-preserving record collector with a bulk transform**
//!
//! The accumulator owns a configuration mapping, fixed at construction,
//! and a growable record sequence. Growth is append-only: the sequence
//! never shrinks and keeps insertion order. `process` derives new
//! records and never touches stored state.

use serde_json::{Map, Value};

use crate::record::{ProcessedRecord, Record};

#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    config: Map<String, Value>,
    records: Vec<Record>,
}

impl Accumulator {
    /// The configuration mapping is stored verbatim and is immutable
    /// for the accumulator's lifetime.
    pub fn new(config: Map<String, Value>) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    pub fn config(&self) -> &Map<String, Value> {
        &self.config
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one record. Always succeeds; no validation.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Derive one [`ProcessedRecord`] per stored record, in insertion
    /// order. Stored state is left unchanged, so repeated calls on an
    /// unchanged accumulator yield identical output.
    pub fn process(&self) -> Vec<ProcessedRecord> {
        self.records.iter().map(ProcessedRecord::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(debug: bool) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("debug".into(), json!(debug));
        map
    }

    #[test]
    fn starts_empty() {
        let acc = Accumulator::new(config(true));
        assert!(acc.is_empty());
        assert!(acc.process().is_empty());
    }

    #[test]
    fn config_stored_verbatim() {
        let acc = Accumulator::new(config(true));
        assert_eq!(acc.config().get("debug"), Some(&json!(true)));
    }

    #[test]
    fn append_is_monotonic_and_ordered() {
        let mut acc = Accumulator::new(Map::new());
        for id in 1..=5 {
            acc.append(Record::new(id, format!("r{id}")));
            assert_eq!(acc.len(), id as usize);
        }

        let ids: Vec<u64> = acc.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn process_flags_every_record() {
        let mut acc = Accumulator::new(config(true));
        acc.append(Record::new(1, "Test").with_active(true));

        let processed = acc.process();
        assert_eq!(processed.len(), 1);
        assert!(processed[0].processed);

        let encoded = serde_json::to_value(&processed[0]).unwrap();
        assert_eq!(encoded["id"], json!(1));
        assert_eq!(encoded["name"], json!("Test"));
        assert_eq!(encoded["active"], json!(true));
        assert_eq!(encoded["processed"], json!(true));
    }

    #[test]
    fn process_does_not_mutate_stored_state() {
        let mut acc = Accumulator::new(Map::new());
        acc.append(Record::new(1, "a").with_value(json!("x")));
        acc.append(Record::new(2, "b"));

        let first = acc.process();
        let second = acc.process();
        assert_eq!(first, second);
        assert_eq!(acc.len(), 2);
    }
}
