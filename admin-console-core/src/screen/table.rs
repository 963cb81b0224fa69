//! Table columns and cell rendering

use crate::kind::RecordKind;
use crate::types::Record;
use crate::workflow::StatusAction;

/// Text shown for absent or empty values
pub const PLACEHOLDER: &str = "-";

/// Key of the trailing pseudo-column holding row controls
pub const ACTIONS_COLUMN: &str = "actions";

/// 表格列定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    /// Fixed width in cells; `None` takes the remaining space
    pub width: Option<u16>,
}

impl Column {
    pub const fn new(key: &'static str, header: &'static str, width: Option<u16>) -> Self {
        Self { key, header, width }
    }

    pub const fn actions(width: Option<u16>) -> Self {
        Self::new(ACTIONS_COLUMN, "Actions", width)
    }

    pub fn is_actions(&self) -> bool {
        self.key == ACTIONS_COLUMN
    }
}

/// Control offered on a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    Status(StatusAction),
}

/// Rendered content of one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Actions(Vec<RowAction>),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            Cell::Actions(_) => None,
        }
    }
}

/// Render `record`'s value for `column`
///
/// Absent and empty values render as [`PLACEHOLDER`] for every column.
/// Numbers are always present, so a count of 0 renders as `0`.
pub fn render_cell(kind: &dyn RecordKind, record: &Record, column: &Column) -> Cell {
    if column.is_actions() {
        return Cell::Actions(kind.available_actions(record));
    }
    let text = record
        .field(column.key)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    Cell::Text(text)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::{Article, ArticleStatus, RecordType};

    fn article(content: &str, views: u64) -> Record {
        Record::Article(Article {
            id: 1,
            title: "Hello".to_string(),
            content: content.to_string(),
            author: "kim".to_string(),
            category: None,
            status: ArticleStatus::Draft,
            views,
            created_at: Utc::now(),
        })
    }

    #[test]
    fn missing_or_empty_values_use_placeholder() {
        let kind = RecordType::Article.kind();
        let record = article("", 0);
        let text = |key| render_cell(kind, &record, &Column::new(key, key, None));

        assert_eq!(text("category"), Cell::Text(PLACEHOLDER.to_string()));
        assert_eq!(text("content"), Cell::Text(PLACEHOLDER.to_string()));
        assert_eq!(text("nonexistent"), Cell::Text(PLACEHOLDER.to_string()));
        // 数字 0 是值，不替换
        assert_eq!(text("views"), Cell::Text("0".to_string()));
        assert_eq!(text("id"), Cell::Text("1".to_string()));
        assert_eq!(text("title"), Cell::Text("Hello".to_string()));
    }

    #[test]
    fn actions_column_renders_controls() {
        let kind = RecordType::Article.kind();
        let cell = render_cell(kind, &article("x", 3), &Column::actions(None));
        assert_eq!(
            cell,
            Cell::Actions(vec![
                RowAction::Edit,
                RowAction::Delete,
                RowAction::Status(StatusAction::Publish),
            ])
        );
        assert_eq!(cell.as_text(), None);
    }
}
