//! Filter rule compilation and record exclusion
//!
//! Filters are (field, values) pairs taken from the CLI options. Each
//! comma-separated value compiles into one [`FilterRule`]; a record is
//! excluded when *any* rule matches its serialized text (OR across rules),
//! and retained otherwise.
//!
//! # Semantics
//!
//! ```text
//! --filter-reason warning          drop records with "reason": "warning"
//! --filter-opt-level 0,1           drop opt_level 0 or 1, keep the rest
//! (no filter options)              identity: every record passes through
//! ```
//!
//! Matching is textual, over the record's canonical serialized form, so a
//! filter value matches both the bare and the double-quoted rendering of the
//! field's value.

pub mod rule;

pub use rule::FilterRule;

use crate::output::render_record;
use serde_json::Value;

/// The full set of active exclusion rules for a run.
#[derive(Debug, Default)]
pub struct FilterSet {
    rules: Vec<FilterRule>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile one rule per comma-separated value and add them to the set.
    ///
    /// `None` means the option was not given and is a no-op. Values are not
    /// trimmed; empty or whitespace-only tokens still produce rules.
    pub fn add_filter(&mut self, field: &str, values: Option<&str>) {
        let Some(values) = values else {
            return;
        };
        for value in values.split(',') {
            self.rules.push(FilterRule::compile(field, value));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when at least one rule matches the serialized record text.
    pub fn is_filtered(&self, text: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(text))
    }

    /// Reduce a record sequence, dropping every record matching any rule.
    ///
    /// An empty set returns the input unchanged. Retained records keep their
    /// relative order.
    pub fn apply(&self, records: Vec<Value>) -> Vec<Value> {
        if self.rules.is_empty() {
            return records;
        }
        records
            .into_iter()
            .filter(|record| !self.is_filtered(&render_record(record)))
            .collect()
    }
}
