//! Record envelope shared by both record types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Account, AccountDraft, Article, ArticleDraft};
use crate::error::CoreError;

/// Service-assigned numeric identifier
pub type RecordId = u64;

/// Which record type a screen, service call or draft refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// 账户
    Account,
    /// 文章
    #[default]
    Article,
}

impl RecordType {
    /// Tab order
    pub fn all() -> &'static [RecordType] {
        &[RecordType::Article, RecordType::Account]
    }

    /// Stable identifier, also used in config files
    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::Account => "account",
            RecordType::Article => "article",
        }
    }

    /// Singular display label
    pub fn label(self) -> &'static str {
        match self {
            RecordType::Account => "Account",
            RecordType::Article => "Article",
        }
    }

    /// The other record type
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            RecordType::Account => RecordType::Article,
            RecordType::Article => RecordType::Account,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "account" | "accounts" | "user" | "users" => Ok(RecordType::Account),
            "article" | "articles" | "post" | "posts" => Ok(RecordType::Article),
            other => Err(CoreError::Validation(format!("Unknown record type: {other}"))),
        }
    }
}

/// A record of either type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Account(Account),
    Article(Article),
}

impl Record {
    pub fn id(&self) -> RecordId {
        match self {
            Record::Account(a) => a.id,
            Record::Article(a) => a.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Record::Account(a) => a.created_at,
            Record::Article(a) => a.created_at,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Account(_) => RecordType::Account,
            Record::Article(_) => RecordType::Article,
        }
    }

    pub fn as_account(&self) -> Option<&Account> {
        match self {
            Record::Account(a) => Some(a),
            Record::Article(_) => None,
        }
    }

    pub fn as_article(&self) -> Option<&Article> {
        match self {
            Record::Article(a) => Some(a),
            Record::Account(_) => None,
        }
    }

    /// Text value of a table column for this record.
    ///
    /// Returns `None` for unknown keys and for absent optional values; callers
    /// substitute the placeholder themselves.
    pub fn field(&self, key: &str) -> Option<String> {
        match self {
            Record::Account(a) => a.field(key),
            Record::Article(a) => a.field(key),
        }
    }
}

impl From<Account> for Record {
    fn from(account: Account) -> Self {
        Record::Account(account)
    }
}

impl From<Article> for Record {
    fn from(article: Article) -> Self {
        Record::Article(article)
    }
}

/// Validated field values for a create or update call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordDraft {
    Account(AccountDraft),
    Article(ArticleDraft),
}

impl RecordDraft {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordDraft::Account(_) => RecordType::Account,
            RecordDraft::Article(_) => RecordType::Article,
        }
    }
}

/// Date column format
pub(crate) fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Date-time column format
pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}
