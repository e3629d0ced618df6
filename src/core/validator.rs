use crate::core::{LogSink, Record};
use std::collections::BTreeSet;

const UNNAMED_USER: &str = "unnamed user";

/// Checks records against the configured required-field set. Holds no state
/// beyond the field names; validation is a pure function of the record.
pub struct RecordValidator {
    required_fields: Vec<String>,
}

impl RecordValidator {
    pub fn new(required_fields: &[String]) -> Self {
        Self {
            required_fields: required_fields.to_vec(),
        }
    }

    /// Returns the required fields that are absent or blank in `record`.
    /// A field counts as missing when the key is not present or its value
    /// trims to the empty string. Sorted, so log messages are stable.
    pub fn missing_fields<'a>(&'a self, record: &Record) -> BTreeSet<&'a str> {
        self.required_fields
            .iter()
            .filter(|field| {
                record
                    .get(field)
                    .map_or(true, |value| value.trim().is_empty())
            })
            .map(String::as_str)
            .collect()
    }

    /// Validates one record; on failure writes a single warning entry naming
    /// the row and the missing fields, and returns false. Valid records
    /// produce no journal entry.
    pub fn is_valid<L: LogSink + ?Sized>(&self, record: &Record, row_num: usize, sink: &L) -> bool {
        let missing = self.missing_fields(record);
        if missing.is_empty() {
            return true;
        }

        let ident = record
            .get("name")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNNAMED_USER);
        let fields: Vec<&str> = missing.into_iter().collect();
        sink.warn(&format!(
            "Skipped row {} ({}): Missing required field(s) - {}",
            row_num,
            ident,
            fields.join(", ")
        ));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::domain::model::LogLevel;

    fn validator() -> RecordValidator {
        RecordValidator::new(&["email".to_string()])
    }

    #[test]
    fn valid_record_passes_without_logging() {
        let sink = MemorySink::new();
        let record = Record::from_pairs([("email", "good@test.com"), ("name", "Alice")]);

        assert!(validator().is_valid(&record, 1, &sink));
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn blank_email_is_rejected_with_one_warning() {
        let sink = MemorySink::new();
        let record = Record::from_pairs([("email", ""), ("name", "Bob")]);

        assert!(!validator().is_valid(&record, 2, &sink));

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Warning);
        assert_eq!(
            entries[0].message,
            "Skipped row 2 (Bob): Missing required field(s) - email"
        );
    }

    #[test]
    fn missing_email_key_is_rejected() {
        let sink = MemorySink::new();
        let record = Record::from_pairs([("name", "Charlie")]);

        assert!(!validator().is_valid(&record, 3, &sink));
        assert_eq!(sink.entries().len(), 1);
        assert!(sink.entries()[0].message.contains("row 3 (Charlie)"));
    }

    #[test]
    fn whitespace_only_email_counts_as_missing() {
        let record = Record::from_pairs([("email", "   ")]);
        let validator = validator();
        let missing = validator.missing_fields(&record);
        assert_eq!(missing.into_iter().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn nameless_record_uses_placeholder_ident() {
        let sink = MemorySink::new();
        let record = Record::from_pairs([("role", "admin")]);

        assert!(!validator().is_valid(&record, 7, &sink));
        assert!(sink.entries()[0].message.contains("(unnamed user)"));
    }

    #[test]
    fn multiple_missing_fields_are_sorted() {
        let sink = MemorySink::new();
        let validator = RecordValidator::new(&["role".to_string(), "email".to_string()]);
        let record = Record::from_pairs([("name", "Dana")]);

        assert!(!validator.is_valid(&record, 4, &sink));
        assert!(sink.entries()[0]
            .message
            .ends_with("Missing required field(s) - email, role"));
    }

    #[test]
    fn validation_is_idempotent() {
        let sink = MemorySink::new();
        let record = Record::from_pairs([("email", "good@test.com")]);
        let validator = validator();

        assert!(validator.is_valid(&record, 1, &sink));
        assert!(validator.is_valid(&record, 1, &sink));
        assert!(sink.entries().is_empty());
    }
}
