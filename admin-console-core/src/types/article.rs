//! 文章相关类型定义

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::format_date;
use super::RecordId;
use crate::error::{CoreError, CoreResult};

/// 文章分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    Development,
    Design,
    Accessibility,
}

impl ArticleCategory {
    pub fn all() -> &'static [ArticleCategory] {
        &[
            ArticleCategory::Development,
            ArticleCategory::Design,
            ArticleCategory::Accessibility,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArticleCategory::Development => "development",
            ArticleCategory::Design => "design",
            ArticleCategory::Accessibility => "accessibility",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleCategory::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("Unknown category: {s}")))
    }
}

/// 发布状态
///
/// Transitions between states are defined in [`crate::workflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    pub fn all() -> &'static [ArticleStatus] {
        &[
            ArticleStatus::Draft,
            ArticleStatus::Published,
            ArticleStatus::Archived,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleStatus::all()
            .iter()
            .copied()
            .find(|st| st.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("Unknown article status: {s}")))
    }
}

/// 文章
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub category: Option<ArticleCategory>,
    pub status: ArticleStatus,
    /// 浏览量，由服务维护
    #[serde(default)]
    pub views: u64,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub(crate) fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "content" => Some(self.content.clone()),
            "author" => Some(self.author.clone()),
            "category" => self.category.map(|c| c.to_string()),
            "status" => Some(self.status.to_string()),
            "views" => Some(self.views.to_string()),
            "createdAt" => Some(format_date(&self.created_at)),
            _ => None,
        }
    }
}

/// 创建/更新文章请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: Option<ArticleCategory>,
    pub status: ArticleStatus,
}

impl ArticleDraft {
    /// Required-field check shared by form parsing and the reference services
    pub fn validate(&self) -> CoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("Title is required".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(CoreError::Validation("Author is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_missing_category_renders_as_none() {
        let json = r#"{
            "id": 1,
            "title": "Hello",
            "author": "lee",
            "status": "published",
            "views": 0,
            "createdAt": 1700000000
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.category, None);
        assert_eq!(article.content, "");
        assert_eq!(article.field("category"), None);
        assert_eq!(article.field("views").as_deref(), Some("0"));
    }

    #[test]
    fn validate_requires_title_and_author() {
        let mut draft = ArticleDraft {
            title: "T".to_string(),
            content: String::new(),
            author: "A".to_string(),
            category: None,
            status: ArticleStatus::Draft,
        };
        assert!(draft.validate().is_ok());
        draft.author.clear();
        assert_eq!(
            draft.validate(),
            Err(CoreError::Validation("Author is required".to_string()))
        );
    }
}
