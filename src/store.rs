use crate::errors::InputError;
use serde_json::Value;

/// Ordered collection of parsed diagnostic records.
///
/// Records keep their input order and are never deduplicated; two identical
/// lines produce two entries. Filtering builds a new sequence rather than
/// mutating the store.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Value>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a sequence of text lines into a store.
    ///
    /// Lines that do not look like a JSON object are skipped as interleaved
    /// noise (blank lines, build log text). Lines that do look like one must
    /// parse as valid JSON; a failure aborts the whole run.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut store = Self::new();

        for (idx, line) in lines.into_iter().enumerate() {
            if !looks_like_object(line) {
                continue;
            }
            let record: Value =
                serde_json::from_str(line).map_err(|source| InputError::MalformedInput {
                    line_number: idx + 1,
                    line: line.to_string(),
                    source,
                })?;
            store.append(record);
        }

        Ok(store)
    }

    /// Add one record at the end, preserving input order.
    pub fn append(&mut self, record: Value) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Value> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Structural shape check: an opening `{` followed, later in the line, by a
/// closing `}`. Unanchored, so leading noise does not hide a candidate line.
fn looks_like_object(line: &str) -> bool {
    match line.find('{') {
        Some(open) => line[open..].contains('}'),
        None => false,
    }
}
