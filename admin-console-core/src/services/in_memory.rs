//! In-memory reference services
//!
//! Used by tests and as the working set behind the TUI's file-backed
//! services. State lives behind a `tokio::sync::RwLock`; records keep their
//! insertion order.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountService, ArticleService};
use crate::types::{
    Account, AccountDraft, Article, ArticleDraft, RecordId, RecordType,
};
use crate::workflow::StatusAction;

fn next_id<I: Iterator<Item = RecordId>>(ids: I) -> RecordId {
    ids.max().unwrap_or(0) + 1
}

// ===== Accounts =====

/// 内存账户服务
#[derive(Default)]
pub struct InMemoryAccountService {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records (e.g. loaded from disk)
    pub fn with_records(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> Vec<Account> {
        self.accounts.read().await.clone()
    }

    /// Replace the whole state, e.g. with an earlier snapshot
    pub async fn replace(&self, accounts: Vec<Account>) {
        *self.accounts.write().await = accounts;
    }

    fn ensure_unique(accounts: &[Account], username: &str, except: Option<RecordId>) -> CoreResult<()> {
        let taken = accounts
            .iter()
            .any(|a| a.username == username && Some(a.id) != except);
        if taken {
            return Err(CoreError::Validation(format!(
                "Username already exists: {username}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountService for InMemoryAccountService {
    async fn get_all(&self) -> CoreResult<Vec<Account>> {
        Ok(self.accounts.read().await.clone())
    }

    async fn create(&self, draft: AccountDraft) -> CoreResult<Account> {
        draft.validate()?;
        let mut accounts = self.accounts.write().await;
        Self::ensure_unique(&accounts, &draft.username, None)?;

        let account = Account {
            id: next_id(accounts.iter().map(|a| a.id)),
            username: draft.username,
            email: draft.email,
            role: draft.role,
            status: draft.status,
            created_at: Utc::now(),
            last_login: None,
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn update(&self, id: RecordId, draft: AccountDraft) -> CoreResult<Account> {
        draft.validate()?;
        let mut accounts = self.accounts.write().await;
        let index = accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(CoreError::NotFound {
                record_type: RecordType::Account,
                id,
            })?;
        Self::ensure_unique(&accounts, &draft.username, Some(id))?;

        let account = &mut accounts[index];
        account.username = draft.username;
        account.email = draft.email;
        account.role = draft.role;
        account.status = draft.status;
        Ok(account.clone())
    }

    async fn delete(&self, id: RecordId) -> CoreResult<()> {
        let mut accounts = self.accounts.write().await;
        let original_len = accounts.len();
        accounts.retain(|a| a.id != id);

        if accounts.len() == original_len {
            return Err(CoreError::NotFound {
                record_type: RecordType::Account,
                id,
            });
        }
        Ok(())
    }
}

// ===== Articles =====

/// 内存文章服务
#[derive(Default)]
pub struct InMemoryArticleService {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records (e.g. loaded from disk)
    pub fn with_records(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> Vec<Article> {
        self.articles.read().await.clone()
    }

    /// Replace the whole state, e.g. with an earlier snapshot
    pub async fn replace(&self, articles: Vec<Article>) {
        *self.articles.write().await = articles;
    }

    async fn transition(&self, id: RecordId, action: StatusAction) -> CoreResult<Article> {
        let mut articles = self.articles.write().await;
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CoreError::NotFound {
                record_type: RecordType::Article,
                id,
            })?;
        article.status = action.apply(article.status)?;
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleService for InMemoryArticleService {
    async fn get_all(&self) -> CoreResult<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }

    async fn create(&self, draft: ArticleDraft) -> CoreResult<Article> {
        draft.validate()?;
        let mut articles = self.articles.write().await;

        let article = Article {
            id: next_id(articles.iter().map(|a| a.id)),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            category: draft.category,
            status: draft.status,
            views: 0,
            created_at: Utc::now(),
        };
        articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, id: RecordId, draft: ArticleDraft) -> CoreResult<Article> {
        draft.validate()?;
        let mut articles = self.articles.write().await;
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CoreError::NotFound {
                record_type: RecordType::Article,
                id,
            })?;
        article.title = draft.title;
        article.content = draft.content;
        article.author = draft.author;
        article.category = draft.category;
        article.status = draft.status;
        Ok(article.clone())
    }

    async fn delete(&self, id: RecordId) -> CoreResult<()> {
        let mut articles = self.articles.write().await;
        let original_len = articles.len();
        articles.retain(|a| a.id != id);

        if articles.len() == original_len {
            return Err(CoreError::NotFound {
                record_type: RecordType::Article,
                id,
            });
        }
        Ok(())
    }

    async fn publish(&self, id: RecordId) -> CoreResult<Article> {
        self.transition(id, StatusAction::Publish).await
    }

    async fn archive(&self, id: RecordId) -> CoreResult<Article> {
        self.transition(id, StatusAction::Archive).await
    }

    async fn restore(&self, id: RecordId) -> CoreResult<Article> {
        self.transition(id, StatusAction::Restore).await
    }
}
