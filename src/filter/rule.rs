use regex::Regex;

/// A compiled (field, value) exclusion matcher.
///
/// The pattern recognizes the value directly after `"field": ` in a record's
/// serialized text, with or without surrounding double quotes, so a filter
/// value of `2` matches both `"opt_level": 2` and `"opt_level": "2"`.
#[derive(Debug, Clone)]
pub struct FilterRule {
    field: String,
    value: String,
    pattern: Regex,
}

impl FilterRule {
    /// Compile a rule. Never fails: the value token is interpolated into the
    /// pattern verbatim, so metacharacters keep their regex meaning, but a
    /// value that is not a valid regex fragment falls back to a literal match.
    pub fn compile(field: &str, value: &str) -> Self {
        let raw = format!(r#""{field}": (")?{value}(")?"#);
        let pattern = Regex::new(&raw).unwrap_or_else(|_| {
            let literal = format!(r#""{field}": (")?{}(")?"#, regex::escape(value));
            Regex::new(&literal).expect("escaped filter pattern is a valid regex")
        });

        Self {
            field: field.to_string(),
            value: value.to_string(),
            pattern,
        }
    }

    /// Test the rule against a record's serialized text form.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
