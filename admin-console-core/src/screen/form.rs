//! Form state buffer and form field descriptions

use std::collections::BTreeMap;

/// How a form field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    /// Single-line text
    Text,
    /// Free text spanning several lines
    Multiline,
    /// One of a fixed list of values
    Choice(&'static [&'static str]),
}

/// One field of a create/edit dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub input: FieldInput,
}

impl FormField {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        required: bool,
        input: FieldInput,
    ) -> Self {
        Self {
            key,
            label,
            required,
            input,
        }
    }
}

/// Transient field values bound to the open dialog
///
/// Keys are not checked against any field list; unknown keys are kept and
/// ignored by parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBuffer {
    fields: BTreeMap<String, String>,
}

impl FormBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Raw value as typed
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Trimmed value, `None` when absent or blank
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
