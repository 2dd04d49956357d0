use serde::ser::{Serialize, SerializeMap, Serializer};

// ---------------------------------------------------------------------------
// Record – one row of the source file
// ---------------------------------------------------------------------------

/// A single job listing: field name → raw string value, in source order.
///
/// Values are kept exactly as loaded. Numeric columns such as `min_salary`
/// are parsed lazily by the query layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(field, value)` pairs. A repeated field keeps its
    /// first position and takes the later value.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Record::new();
        for (k, v) in pairs {
            record.insert(k, v);
        }
        record
    }

    /// Value of `field`, or `None` when the record has no such column.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_str())
    }

    /// Set `field`, replacing in place if present, appending otherwise.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Serialized as a flat map in field order.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// RecordSet – the complete loaded file
// ---------------------------------------------------------------------------

/// Ordered collection of records plus the column names in header order.
///
/// Filtering never reorders: every operation in [`crate::insights`] that
/// returns a `RecordSet` keeps the relative order of its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    /// All records (rows), in file order.
    pub records: Vec<Record>,
    /// Column names in the order they appeared in the source.
    pub column_names: Vec<String>,
}

impl RecordSet {
    /// Build a set from records, deriving column names from their fields.
    ///
    /// Without a header to go by, columns come out in first-seen order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut column_names: Vec<String> = Vec::new();
        for rec in &records {
            for (field, _) in rec.fields() {
                if !column_names.iter().any(|c| c == field) {
                    column_names.push(field.to_string());
                }
            }
        }
        RecordSet {
            records,
            column_names,
        }
    }

    /// Build a set with an explicit column order (e.g. a CSV header).
    pub fn with_columns(column_names: Vec<String>, records: Vec<Record>) -> Self {
        RecordSet {
            records,
            column_names,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_get_returns_none_for_missing_field() {
        let rec = Record::from_pairs([("industry", "Software")]);
        assert_eq!(rec.get("industry"), Some("Software"));
        assert_eq!(rec.get("job_type"), None);
        assert!(!rec.contains_field("job_type"));
    }

    #[test]
    fn from_records_collects_columns_in_first_seen_order() {
        let a = Record::from_pairs([("job_type", "FULL_TIME"), ("industry", "Finance")]);
        let b = Record::from_pairs([("max_salary", "10"), ("industry", "Retail")]);
        let set = RecordSet::from_records(vec![a, b]);
        assert_eq!(set.column_names, vec!["job_type", "industry", "max_salary"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn record_serializes_as_flat_map_in_field_order() {
        let rec = Record::from_pairs([("job_type", "INTERN"), ("industry", "Software")]);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"job_type":"INTERN","industry":"Software"}"#);
    }

    #[test]
    fn repeated_field_keeps_position_and_takes_last_value() {
        let rec = Record::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
        let fields: Vec<_> = rec.fields().collect();
        assert_eq!(fields, vec![("a", "3"), ("b", "2")]);
    }
}
