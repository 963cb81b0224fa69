//! 类型定义模块

mod account;
mod article;
mod record;

pub use account::{Account, AccountDraft, AccountRole, AccountStatus};
pub use article::{Article, ArticleCategory, ArticleDraft, ArticleStatus};
pub use record::{Record, RecordDraft, RecordId, RecordType};
