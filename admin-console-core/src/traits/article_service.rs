//! Article service Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Article, ArticleDraft, RecordId};

/// Article service Trait
///
/// Besides CRUD, exposes the publication workflow. Implementations enforce
/// the transition table from [`crate::workflow`] and fail with
/// `InvalidTransition` otherwise.
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// Get all articles
    async fn get_all(&self) -> CoreResult<Vec<Article>>;

    /// Create an article
    async fn create(&self, draft: ArticleDraft) -> CoreResult<Article>;

    /// Replace the editable fields of an article (view count is untouched)
    async fn update(&self, id: RecordId, draft: ArticleDraft) -> CoreResult<Article>;

    /// Delete an article
    async fn delete(&self, id: RecordId) -> CoreResult<()>;

    /// draft → published
    async fn publish(&self, id: RecordId) -> CoreResult<Article>;

    /// published → archived
    async fn archive(&self, id: RecordId) -> CoreResult<Article>;

    /// archived → published
    async fn restore(&self, id: RecordId) -> CoreResult<Article>;
}
