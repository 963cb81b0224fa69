//! 账户相关类型定义

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{format_date, format_datetime};
use super::RecordId;
use crate::error::{CoreError, CoreResult};

/// 账户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    #[default]
    User,
    Moderator,
    Admin,
}

impl AccountRole {
    pub fn all() -> &'static [AccountRole] {
        &[AccountRole::User, AccountRole::Moderator, AccountRole::Admin]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccountRole::User => "user",
            AccountRole::Moderator => "moderator",
            AccountRole::Admin => "admin",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountRole::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("Unknown role: {s}")))
    }
}

/// 账户状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// 活跃状态
    #[default]
    Active,
    /// 停用
    Inactive,
    /// 封禁
    Suspended,
}

impl AccountStatus {
    pub fn all() -> &'static [AccountStatus] {
        &[
            AccountStatus::Active,
            AccountStatus::Inactive,
            AccountStatus::Suspended,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountStatus::all()
            .iter()
            .copied()
            .find(|st| st.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("Unknown account status: {s}")))
    }
}

/// 账户信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// 账户 ID
    pub id: RecordId,
    /// 用户名（服务内唯一）
    pub username: String,
    pub email: String,
    pub role: AccountRole,
    pub status: AccountStatus,
    /// 创建时间
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    /// 最后登录时间
    #[serde(default, with = "crate::utils::datetime::option")]
    pub last_login: Option<DateTime<Utc>>,
}

impl Account {
    pub(crate) fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "username" => Some(self.username.clone()),
            "email" => Some(self.email.clone()),
            "role" => Some(self.role.to_string()),
            "status" => Some(self.status.to_string()),
            "createdAt" => Some(format_date(&self.created_at)),
            "lastLogin" => self.last_login.as_ref().map(format_datetime),
            _ => None,
        }
    }
}

/// 创建/更新账户请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDraft {
    pub username: String,
    pub email: String,
    pub role: AccountRole,
    pub status: AccountStatus,
}

impl AccountDraft {
    /// Required-field check shared by form parsing and the reference services
    pub fn validate(&self) -> CoreResult<()> {
        if self.username.trim().is_empty() {
            return Err(CoreError::Validation("Username is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(CoreError::Validation("Email is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(CoreError::Validation(format!(
                "Invalid email address: {}",
                self.email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(username: &str, email: &str) -> AccountDraft {
        AccountDraft {
            username: username.to_string(),
            email: email.to_string(),
            role: AccountRole::default(),
            status: AccountStatus::default(),
        }
    }

    #[test]
    fn validate_requires_username_and_email() {
        assert!(draft("a", "a@x.com").validate().is_ok());
        assert_eq!(
            draft(" ", "a@x.com").validate(),
            Err(CoreError::Validation("Username is required".to_string()))
        );
        assert!(draft("a", "").validate().is_err());
        assert!(draft("a", "not-an-email").validate().is_err());
    }

    #[test]
    fn account_json_uses_camel_case_and_optional_last_login() {
        let json = r#"{
            "id": 3,
            "username": "kim",
            "email": "kim@example.com",
            "role": "admin",
            "status": "suspended",
            "createdAt": "2024-01-15T09:30:00Z"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.role, AccountRole::Admin);
        assert_eq!(account.status, AccountStatus::Suspended);
        assert_eq!(account.last_login, None);
        assert_eq!(account.field("createdAt").as_deref(), Some("2024-01-15"));
        assert_eq!(account.field("lastLogin"), None);
    }

    #[test]
    fn role_parsing_rejects_unknown_values() {
        assert_eq!("moderator".parse::<AccountRole>().unwrap(), AccountRole::Moderator);
        assert!("owner".parse::<AccountRole>().is_err());
    }
}
