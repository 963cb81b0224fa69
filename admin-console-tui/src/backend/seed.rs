//! 首次启动时写入的示例数据

use admin_console_core::types::{
    Account, AccountRole, AccountStatus, Article, ArticleCategory, ArticleStatus,
};
use chrono::{DateTime, TimeZone, Utc};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn accounts() -> Vec<Account> {
    let account = |id, username: &str, role, status, created, last_login| Account {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        role,
        status,
        created_at: created,
        last_login,
    };

    vec![
        account(1, "admin", AccountRole::Admin, AccountStatus::Active, at(2024, 1, 1, 9), Some(at(2024, 6, 20, 8))),
        account(2, "minji", AccountRole::Moderator, AccountStatus::Active, at(2024, 1, 15, 10), Some(at(2024, 6, 18, 21))),
        account(3, "jihoon", AccountRole::User, AccountStatus::Active, at(2024, 2, 3, 14), Some(at(2024, 6, 1, 12))),
        account(4, "seoyeon", AccountRole::User, AccountStatus::Inactive, at(2024, 3, 12, 11), None),
        account(5, "spammer", AccountRole::User, AccountStatus::Suspended, at(2024, 4, 2, 16), Some(at(2024, 4, 3, 1))),
    ]
}

pub fn articles() -> Vec<Article> {
    let article = |id, title: &str, author: &str, category, status, views, created| Article {
        id,
        title: title.to_string(),
        content: String::new(),
        author: author.to_string(),
        category,
        status,
        views,
        created_at: created,
    };

    vec![
        article(1, "Design tokens in practice", "minji", Some(ArticleCategory::Design), ArticleStatus::Published, 1280, at(2024, 2, 10, 9)),
        article(2, "Keyboard navigation checklist", "jihoon", Some(ArticleCategory::Accessibility), ArticleStatus::Published, 645, at(2024, 3, 5, 13)),
        article(3, "Migrating to async services", "admin", Some(ArticleCategory::Development), ArticleStatus::Draft, 0, at(2024, 5, 21, 17)),
        article(4, "Color contrast myths", "seoyeon", None, ArticleStatus::Archived, 312, at(2023, 11, 30, 10)),
    ]
}
