//! The address book: an insertion-ordered directory of contact records.

use crate::models::Record;
use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// A directory of contact records keyed by name.
///
/// Holds at most one record per name string; re-adding a name replaces the
/// stored record while keeping its original position. Records are listed in
/// insertion order, and deleting one preserves the relative order of the
/// rest.
///
/// The map itself is never exposed; all mutation goes through
/// [`add_record`](Self::add_record) and [`delete`](Self::delete) so the
/// key always equals the record's own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name.
    ///
    /// If a record with the same name already exists, it is replaced and
    /// keeps its position in the listing order.
    pub fn add_record(&mut self, record: Record) {
        debug!(name = %record.name(), "adding record");
        self.records.insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name.
    ///
    /// Returns `true` if a record was removed. The remaining records keep
    /// their relative order.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.records.shift_remove(name).is_some();
        if removed {
            debug!(name, "deleted record");
        }
        removed
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

// Serde support - serialize as a sequence of records; deserialization
// rebuilds the map keys from the record names.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in self.records.values() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "AddressBook is empty");
        }
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));

        let found = book.find("John").unwrap();
        assert_eq!(found.name().as_str(), "John");
        assert_eq!(found.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_find_absent() {
        let book = AddressBook::new();
        assert!(book.find("Nobody").is_none());
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1111111111"]));

        book.find_mut("John")
            .unwrap()
            .edit_phone("1111111111", "2222222222")
            .unwrap();

        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_readd_replaces_record() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1111111111"]));
        book.add_record(record("John", &["2222222222"]));

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_readd_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));
        book.add_record(record("Jane", &[]));
        book.add_record(record("John", &["1234567890"]));

        let names: Vec<_> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));

        assert!(book.delete("John"));
        assert!(!book.delete("John"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[]));
        book.add_record(record("Bob", &[]));
        book.add_record(record("Carol", &[]));

        assert!(book.delete("Bob"));
        let names: Vec<_> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(AddressBook::new().to_string(), "AddressBook is empty");
    }

    #[test]
    fn test_display_lists_records_in_order() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        book.add_record(record("Jane", &["0987654321"]));

        assert_eq!(
            book.to_string(),
            "Contact name: John, phones: 1234567890\nContact name: Jane, phones: 0987654321"
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890", "0987654321"]));
        book.add_record(record("Jane", &[]));

        let json = serde_json::to_string(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);

        let names: Vec<_> = back.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }

    #[test]
    fn test_serialization_is_record_sequence() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));

        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"[{"name":"John","phones":["1234567890"]}]"#);
    }
}
