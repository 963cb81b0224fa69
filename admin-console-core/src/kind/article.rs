//! Article capability set

use super::{required_text, RecordKind};
use crate::error::CoreResult;
use crate::screen::{
    Column, FieldInput, FormBuffer, FormField, Metric, RowAction, Statistics, Tone,
};
use crate::types::{ArticleCategory, ArticleDraft, ArticleStatus, Record, RecordDraft, RecordType};

const COLUMNS: &[Column] = &[
    Column::new("id", "ID", Some(6)),
    Column::new("title", "Title", None),
    Column::new("author", "Author", Some(12)),
    Column::new("category", "Category", Some(14)),
    Column::new("status", "Status", Some(10)),
    Column::new("views", "Views", Some(7)),
    Column::new("createdAt", "Created", Some(12)),
    Column::actions(Some(30)),
];

const CATEGORIES: &[&str] = &["development", "design", "accessibility"];

// 状态由工作流驱动，不出现在表单中
const FIELDS: &[FormField] = &[
    FormField::new("title", "Title", true, FieldInput::Text),
    FormField::new("author", "Author", true, FieldInput::Text),
    FormField::new("category", "Category", false, FieldInput::Choice(CATEGORIES)),
    FormField::new("content", "Content", false, FieldInput::Multiline),
];

const DEFAULTS: &[(&str, &str)] = &[("status", "draft"), ("content", "")];

/// 文章
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleKind;

impl RecordKind for ArticleKind {
    fn record_type(&self) -> RecordType {
        RecordType::Article
    }

    fn columns(&self) -> &'static [Column] {
        COLUMNS
    }

    fn form_fields(&self) -> &'static [FormField] {
        FIELDS
    }

    fn defaults(&self) -> &'static [(&'static str, &'static str)] {
        DEFAULTS
    }

    fn parse_form(&self, form: &FormBuffer) -> CoreResult<RecordDraft> {
        let form = self.with_defaults(form);
        let draft = ArticleDraft {
            title: required_text(&form, "title"),
            content: form.get("content").unwrap_or_default().to_string(),
            author: required_text(&form, "author"),
            category: form
                .value("category")
                .map(str::parse::<ArticleCategory>)
                .transpose()?,
            status: form
                .value("status")
                .unwrap_or_default()
                .parse::<ArticleStatus>()?,
        };
        draft.validate()?;
        Ok(RecordDraft::Article(draft))
    }

    fn form_from_record(&self, record: &Record) -> FormBuffer {
        let Some(article) = record.as_article() else {
            return FormBuffer::new();
        };
        let mut form = FormBuffer::from_pairs([
            ("title", article.title.as_str()),
            ("content", article.content.as_str()),
            ("author", article.author.as_str()),
            ("status", article.status.as_str()),
        ]);
        if let Some(category) = article.category {
            form.set("category", category.as_str());
        }
        form
    }

    fn statistics(&self, records: &[Record]) -> Statistics {
        let articles: Vec<_> = records.iter().filter_map(Record::as_article).collect();
        let count_status = |status: ArticleStatus| {
            articles.iter().filter(|a| a.status == status).count() as u64
        };

        Statistics {
            total: articles.len(),
            metrics: vec![
                Metric::new("published", "Published", count_status(ArticleStatus::Published), Tone::Success),
                Metric::new("draft", "Drafts", count_status(ArticleStatus::Draft), Tone::Warning),
                Metric::new("archived", "Archived", count_status(ArticleStatus::Archived), Tone::Neutral),
                Metric::new(
                    "views",
                    "Total Views",
                    articles.iter().map(|a| a.views).sum(),
                    Tone::Info,
                ),
            ],
        }
    }

    fn available_actions(&self, record: &Record) -> Vec<RowAction> {
        let mut actions = vec![RowAction::Edit, RowAction::Delete];
        if let Some(article) = record.as_article() {
            actions.push(RowAction::Status(article.status.available_action()));
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::error::CoreError;
    use crate::types::Article;
    use crate::workflow::StatusAction;

    fn article(id: u64, status: ArticleStatus, views: u64) -> Record {
        Record::Article(Article {
            id,
            title: format!("Post {id}"),
            content: String::new(),
            author: "kim".to_string(),
            category: None,
            status,
            views,
            created_at: Utc::now(),
        })
    }

    #[test]
    fn parse_defaults_status_to_draft() {
        let form = FormBuffer::from_pairs([("title", "Hello"), ("author", "lee")]);
        let RecordDraft::Article(draft) = ArticleKind.parse_form(&form).unwrap() else {
            panic!("expected an article draft");
        };
        assert_eq!(draft.status, ArticleStatus::Draft);
        assert_eq!(draft.category, None);
        assert_eq!(draft.content, "");
    }

    #[test]
    fn parse_rejects_unknown_category() {
        let form = FormBuffer::from_pairs([
            ("title", "Hello"),
            ("author", "lee"),
            ("category", "gardening"),
        ]);
        assert!(matches!(
            ArticleKind.parse_form(&form),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn parse_requires_title() {
        let form = FormBuffer::from_pairs([("title", "   "), ("author", "lee")]);
        assert_eq!(
            ArticleKind.parse_form(&form),
            Err(CoreError::Validation("Title is required".to_string()))
        );
    }

    #[test]
    fn edit_form_keeps_status_and_skips_views() {
        let record = article(3, ArticleStatus::Published, 42);
        let form = ArticleKind.form_from_record(&record);
        assert_eq!(form.get("status"), Some("published"));
        assert_eq!(form.get("views"), None);
        assert_eq!(form.get("category"), None);

        let RecordDraft::Article(draft) = ArticleKind.parse_form(&form).unwrap() else {
            panic!("expected an article draft");
        };
        assert_eq!(draft.status, ArticleStatus::Published);
    }

    #[test]
    fn statistics_sum_views() {
        let records = vec![
            article(1, ArticleStatus::Published, 10),
            article(2, ArticleStatus::Draft, 0),
            article(3, ArticleStatus::Archived, 5),
            article(4, ArticleStatus::Published, 7),
        ];
        let stats = ArticleKind.statistics(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.metric("published"), Some(2));
        assert_eq!(stats.metric("draft"), Some(1));
        assert_eq!(stats.metric("archived"), Some(1));
        assert_eq!(stats.metric("views"), Some(22));
    }

    #[test]
    fn empty_collection_has_zero_statistics() {
        let stats = ArticleKind.statistics(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.metrics.iter().all(|m| m.value == 0));
    }

    #[test]
    fn exactly_one_workflow_action_per_status() {
        for (status, expected) in [
            (ArticleStatus::Draft, StatusAction::Publish),
            (ArticleStatus::Published, StatusAction::Archive),
            (ArticleStatus::Archived, StatusAction::Restore),
        ] {
            let actions = ArticleKind.available_actions(&article(1, status, 0));
            let workflow: Vec<_> = actions
                .iter()
                .filter(|a| matches!(a, RowAction::Status(_)))
                .collect();
            assert_eq!(workflow, vec![&RowAction::Status(expected)]);
        }
    }
}
