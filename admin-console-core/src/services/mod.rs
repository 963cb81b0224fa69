//! 业务逻辑服务层

mod in_memory;

pub use in_memory::{InMemoryAccountService, InMemoryArticleService};

use std::sync::Arc;

use crate::error::CoreResult;
use crate::traits::{AccountService, ArticleService};
use crate::types::{Article, Record, RecordDraft, RecordId, RecordType};
use crate::workflow::StatusAction;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的服务实现。
/// Dispatches every call to the service matching the record type, so callers
/// never branch on the type themselves.
pub struct ServiceContext {
    /// 账户服务
    pub account_service: Arc<dyn AccountService>,
    /// 文章服务
    pub article_service: Arc<dyn ArticleService>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        account_service: Arc<dyn AccountService>,
        article_service: Arc<dyn ArticleService>,
    ) -> Self {
        Self {
            account_service,
            article_service,
        }
    }

    /// Context backed by empty in-memory services
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAccountService::new()),
            Arc::new(InMemoryArticleService::new()),
        )
    }

    /// Fetch the full record set of one type
    pub async fn fetch(&self, record_type: RecordType) -> CoreResult<Vec<Record>> {
        let records = match record_type {
            RecordType::Account => self
                .account_service
                .get_all()
                .await?
                .into_iter()
                .map(Record::Account)
                .collect(),
            RecordType::Article => self
                .article_service
                .get_all()
                .await?
                .into_iter()
                .map(Record::Article)
                .collect(),
        };
        Ok(records)
    }

    pub async fn create(&self, draft: RecordDraft) -> CoreResult<Record> {
        let record = match draft {
            RecordDraft::Account(d) => Record::Account(self.account_service.create(d).await?),
            RecordDraft::Article(d) => Record::Article(self.article_service.create(d).await?),
        };
        log::info!("Created {} #{}", record.record_type(), record.id());
        Ok(record)
    }

    pub async fn update(&self, id: RecordId, draft: RecordDraft) -> CoreResult<Record> {
        let record = match draft {
            RecordDraft::Account(d) => Record::Account(self.account_service.update(id, d).await?),
            RecordDraft::Article(d) => Record::Article(self.article_service.update(id, d).await?),
        };
        log::info!("Updated {} #{id}", record.record_type());
        Ok(record)
    }

    pub async fn delete(&self, record_type: RecordType, id: RecordId) -> CoreResult<()> {
        match record_type {
            RecordType::Account => self.account_service.delete(id).await?,
            RecordType::Article => self.article_service.delete(id).await?,
        }
        log::info!("Deleted {record_type} #{id}");
        Ok(())
    }

    /// Run one workflow action against the article service
    pub async fn apply_action(&self, id: RecordId, action: StatusAction) -> CoreResult<Article> {
        let article = match action {
            StatusAction::Publish => self.article_service.publish(id).await?,
            StatusAction::Archive => self.article_service.archive(id).await?,
            StatusAction::Restore => self.article_service.restore(id).await?,
        };
        log::info!("Article #{id}: {action} -> {}", article.status);
        Ok(article)
    }
}
