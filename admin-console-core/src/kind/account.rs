//! Account capability set

use super::{required_text, RecordKind};
use crate::error::CoreResult;
use crate::screen::{Column, FieldInput, FormBuffer, FormField, Metric, Statistics, Tone};
use crate::types::{AccountDraft, AccountRole, AccountStatus, Record, RecordDraft, RecordType};

const COLUMNS: &[Column] = &[
    Column::new("id", "ID", Some(6)),
    Column::new("username", "Username", Some(14)),
    Column::new("email", "Email", None),
    Column::new("role", "Role", Some(10)),
    Column::new("status", "Status", Some(10)),
    Column::new("createdAt", "Created", Some(12)),
    Column::new("lastLogin", "Last Login", Some(17)),
    Column::actions(Some(22)),
];

const ROLES: &[&str] = &["user", "moderator", "admin"];
const STATUSES: &[&str] = &["active", "inactive", "suspended"];

const FIELDS: &[FormField] = &[
    FormField::new("username", "Username", true, FieldInput::Text),
    FormField::new("email", "Email", true, FieldInput::Text),
    FormField::new("role", "Role", true, FieldInput::Choice(ROLES)),
    FormField::new("status", "Status", false, FieldInput::Choice(STATUSES)),
];

const DEFAULTS: &[(&str, &str)] = &[("role", "user"), ("status", "active")];

/// 账户
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountKind;

impl RecordKind for AccountKind {
    fn record_type(&self) -> RecordType {
        RecordType::Account
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
        let draft = AccountDraft {
            username: required_text(&form, "username"),
            email: required_text(&form, "email"),
            role: form.value("role").unwrap_or_default().parse::<AccountRole>()?,
            status: form
                .value("status")
                .unwrap_or_default()
                .parse::<AccountStatus>()?,
        };
        draft.validate()?;
        Ok(RecordDraft::Account(draft))
    }

    fn form_from_record(&self, record: &Record) -> FormBuffer {
        let Some(account) = record.as_account() else {
            return FormBuffer::new();
        };
        FormBuffer::from_pairs([
            ("username", account.username.as_str()),
            ("email", account.email.as_str()),
            ("role", account.role.as_str()),
            ("status", account.status.as_str()),
        ])
    }

    fn statistics(&self, records: &[Record]) -> Statistics {
        let accounts: Vec<_> = records.iter().filter_map(Record::as_account).collect();
        let count_status = |status: AccountStatus| {
            accounts.iter().filter(|a| a.status == status).count() as u64
        };

        Statistics {
            total: accounts.len(),
            metrics: vec![
                Metric::new("active", "Active", count_status(AccountStatus::Active), Tone::Success),
                Metric::new("inactive", "Inactive", count_status(AccountStatus::Inactive), Tone::Warning),
                Metric::new("suspended", "Suspended", count_status(AccountStatus::Suspended), Tone::Destructive),
                Metric::new(
                    "admin",
                    "Admins",
                    accounts.iter().filter(|a| a.role == AccountRole::Admin).count() as u64,
                    Tone::Info,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::error::CoreError;
    use crate::types::Account;

    fn account(id: u64, role: AccountRole, status: AccountStatus) -> Record {
        Record::Account(Account {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            role,
            status,
            created_at: Utc::now(),
            last_login: None,
        })
    }

    #[test]
    fn parse_applies_role_and_status_defaults() {
        let form = FormBuffer::from_pairs([("username", "a"), ("email", "a@x.com")]);
        let draft = AccountKind.parse_form(&form).unwrap();
        assert_eq!(
            draft,
            RecordDraft::Account(AccountDraft {
                username: "a".to_string(),
                email: "a@x.com".to_string(),
                role: AccountRole::User,
                status: AccountStatus::Active,
            })
        );
    }

    #[test]
    fn parse_rejects_missing_username() {
        let form = FormBuffer::from_pairs([("email", "a@x.com")]);
        assert_eq!(
            AccountKind.parse_form(&form),
            Err(CoreError::Validation("Username is required".to_string()))
        );
    }

    #[test]
    fn edit_form_copies_editable_fields() {
        let record = account(7, AccountRole::Moderator, AccountStatus::Suspended);
        let form = AccountKind.form_from_record(&record);
        assert_eq!(form.get("username"), Some("user7"));
        assert_eq!(form.get("role"), Some("moderator"));
        assert_eq!(form.get("status"), Some("suspended"));
        assert_eq!(form.get("id"), None);
        assert_eq!(form.get("createdAt"), None);
    }

    #[test]
    fn statistics_partition_by_status() {
        let records = vec![
            account(1, AccountRole::Admin, AccountStatus::Active),
            account(2, AccountRole::User, AccountStatus::Inactive),
            account(3, AccountRole::Admin, AccountStatus::Suspended),
            account(4, AccountRole::User, AccountStatus::Active),
        ];
        let stats = AccountKind.statistics(&records);
        assert_eq!(stats.total, records.len());
        assert_eq!(stats.metric("active"), Some(2));
        assert_eq!(stats.metric("inactive"), Some(1));
        assert_eq!(stats.metric("suspended"), Some(1));
        assert_eq!(stats.metric("admin"), Some(2));
        let partition: u64 = ["active", "inactive", "suspended"]
            .iter()
            .filter_map(|k| stats.metric(k))
            .sum();
        assert_eq!(partition, stats.total as u64);
    }

    #[test]
    fn accounts_only_offer_edit_and_delete() {
        let record = account(1, AccountRole::User, AccountStatus::Active);
        assert_eq!(
            AccountKind.available_actions(&record),
            vec![crate::screen::RowAction::Edit, crate::screen::RowAction::Delete]
        );
    }
}
