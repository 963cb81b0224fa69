//! 测试辅助模块
//!
//! 提供 mock 服务实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{InMemoryAccountService, InMemoryArticleService, ServiceContext};
use crate::traits::{AccountService, ArticleService};
use crate::types::{
    Account, AccountDraft, AccountRole, AccountStatus, Article, ArticleCategory, ArticleDraft,
    ArticleStatus, RecordId,
};

/// Call counters and failure switches shared by both mocks
#[derive(Default)]
pub struct Probe {
    fetches: AtomicUsize,
    mutations: AtomicUsize,
    /// 如果 Some，get_all 时返回此错误
    fetch_error: RwLock<Option<CoreError>>,
    /// 如果 Some，所有修改操作返回此错误
    mutation_error: RwLock<Option<CoreError>>,
}

impl Probe {
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn mutations(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    pub async fn set_fetch_error(&self, err: Option<CoreError>) {
        *self.fetch_error.write().await = err;
    }

    pub async fn set_mutation_error(&self, err: Option<CoreError>) {
        *self.mutation_error.write().await = err;
    }

    async fn on_fetch(&self) -> CoreResult<()> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.fetch_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn on_mutation(&self) -> CoreResult<()> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        match self.mutation_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

// ===== MockAccountService =====

pub struct MockAccountService {
    inner: InMemoryAccountService,
    pub probe: Probe,
}

impl MockAccountService {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            inner: InMemoryAccountService::with_records(accounts),
            probe: Probe::default(),
        }
    }
}

#[async_trait]
impl AccountService for MockAccountService {
    async fn get_all(&self) -> CoreResult<Vec<Account>> {
        self.probe.on_fetch().await?;
        self.inner.get_all().await
    }

    async fn create(&self, draft: AccountDraft) -> CoreResult<Account> {
        self.probe.on_mutation().await?;
        self.inner.create(draft).await
    }

    async fn update(&self, id: RecordId, draft: AccountDraft) -> CoreResult<Account> {
        self.probe.on_mutation().await?;
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: RecordId) -> CoreResult<()> {
        self.probe.on_mutation().await?;
        self.inner.delete(id).await
    }
}

// ===== MockArticleService =====

pub struct MockArticleService {
    inner: InMemoryArticleService,
    pub probe: Probe,
}

impl MockArticleService {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            inner: InMemoryArticleService::with_records(articles),
            probe: Probe::default(),
        }
    }
}

#[async_trait]
impl ArticleService for MockArticleService {
    async fn get_all(&self) -> CoreResult<Vec<Article>> {
        self.probe.on_fetch().await?;
        self.inner.get_all().await
    }

    async fn create(&self, draft: ArticleDraft) -> CoreResult<Article> {
        self.probe.on_mutation().await?;
        self.inner.create(draft).await
    }

    async fn update(&self, id: RecordId, draft: ArticleDraft) -> CoreResult<Article> {
        self.probe.on_mutation().await?;
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: RecordId) -> CoreResult<()> {
        self.probe.on_mutation().await?;
        self.inner.delete(id).await
    }

    async fn publish(&self, id: RecordId) -> CoreResult<Article> {
        self.probe.on_mutation().await?;
        self.inner.publish(id).await
    }

    async fn archive(&self, id: RecordId) -> CoreResult<Article> {
        self.probe.on_mutation().await?;
        self.inner.archive(id).await
    }

    async fn restore(&self, id: RecordId) -> CoreResult<Article> {
        self.probe.on_mutation().await?;
        self.inner.restore(id).await
    }
}

// ===== 工厂方法 =====

pub struct TestHarness {
    pub ctx: Arc<ServiceContext>,
    pub accounts: Arc<MockAccountService>,
    pub articles: Arc<MockArticleService>,
}

/// Context over mocks seeded with [`sample_accounts`] and [`sample_articles`]
pub fn harness() -> TestHarness {
    let accounts = Arc::new(MockAccountService::new(sample_accounts()));
    let articles = Arc::new(MockArticleService::new(sample_articles()));
    let ctx = Arc::new(ServiceContext::new(accounts.clone(), articles.clone()));
    TestHarness {
        ctx,
        accounts,
        articles,
    }
}

pub fn sample_accounts() -> Vec<Account> {
    let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    vec![
        Account {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            role: AccountRole::Admin,
            status: AccountStatus::Active,
            created_at: created,
            last_login: Some(created),
        },
        Account {
            id: 2,
            username: "kim".to_string(),
            email: "kim@example.com".to_string(),
            role: AccountRole::User,
            status: AccountStatus::Inactive,
            created_at: created,
            last_login: None,
        },
    ]
}

pub fn sample_articles() -> Vec<Article> {
    let created = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
    vec![
        Article {
            id: 1,
            title: "Getting started".to_string(),
            content: "Hello".to_string(),
            author: "admin".to_string(),
            category: Some(ArticleCategory::Development),
            status: ArticleStatus::Draft,
            views: 0,
            created_at: created,
        },
        Article {
            id: 2,
            title: "Color contrast".to_string(),
            content: String::new(),
            author: "kim".to_string(),
            category: None,
            status: ArticleStatus::Published,
            views: 120,
            created_at: created,
        },
    ]
}
