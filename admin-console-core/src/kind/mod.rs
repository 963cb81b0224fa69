//! Record kind capability sets
//!
//! Everything that differs between accounts and articles (columns, form
//! fields, defaults, statistics, row actions, form parsing) lives behind
//! [`RecordKind`], so the screen never branches on the record type.

mod account;
mod article;

pub use account::AccountKind;
pub use article::ArticleKind;

use crate::error::CoreResult;
use crate::screen::{Column, FormBuffer, FormField, RowAction, Statistics};
use crate::types::{Record, RecordDraft, RecordType};

/// Per-type behavior of the entity screen
pub trait RecordKind: Send + Sync {
    /// Record type this kind describes
    fn record_type(&self) -> RecordType;

    /// Table columns in display order; the actions column is always last
    fn columns(&self) -> &'static [Column];

    /// Fields shown in the create/edit dialog
    fn form_fields(&self) -> &'static [FormField];

    /// Values applied to fields the form leaves blank
    fn defaults(&self) -> &'static [(&'static str, &'static str)];

    /// Turns a form buffer into a validated draft
    ///
    /// Defaults are applied first; missing required fields and unknown enum
    /// values fail with `Validation`.
    fn parse_form(&self, form: &FormBuffer) -> CoreResult<RecordDraft>;

    /// Editable fields of `record` as form values (derived fields excluded)
    fn form_from_record(&self, record: &Record) -> FormBuffer;

    /// Summary figures for the current collection
    fn statistics(&self, records: &[Record]) -> Statistics;

    /// Controls offered in the actions column
    fn available_actions(&self, _record: &Record) -> Vec<RowAction> {
        vec![RowAction::Edit, RowAction::Delete]
    }

    /// Copy of `form` with defaults filled in for blank fields
    fn with_defaults(&self, form: &FormBuffer) -> FormBuffer {
        let mut filled = form.clone();
        for (key, value) in self.defaults() {
            if form.value(key).is_none() {
                filled.set(*key, *value);
            }
        }
        filled
    }
}

static ACCOUNT_KIND: AccountKind = AccountKind;
static ARTICLE_KIND: ArticleKind = ArticleKind;

impl RecordType {
    /// Capability set for this record type
    pub fn kind(self) -> &'static dyn RecordKind {
        match self {
            RecordType::Account => &ACCOUNT_KIND,
            RecordType::Article => &ARTICLE_KIND,
        }
    }
}

/// Required text field, trimmed
fn required_text(form: &FormBuffer, key: &str) -> String {
    form.value(key).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ACTIONS_COLUMN;

    #[test]
    fn actions_column_is_last_for_every_kind() {
        for &record_type in RecordType::all() {
            let columns = record_type.kind().columns();
            assert_eq!(columns.last().map(|c| c.key), Some(ACTIONS_COLUMN));
            assert_eq!(
                columns.iter().filter(|c| c.is_actions()).count(),
                1,
                "{record_type} has a single actions column"
            );
            assert_eq!(record_type.kind().record_type(), record_type);
        }
    }
}
