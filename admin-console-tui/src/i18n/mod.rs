//! 国际化（i18n）模块
//!
//! 提供多语言支持。
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。

use std::sync::atomic::{AtomicUsize, Ordering};

use admin_console_core::screen::{Notice, Operation, RowAction};
use admin_console_core::types::RecordType;
use admin_console_core::workflow::StatusAction;
use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod ko_kr;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 英语（美国）
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
    /// 韩语（韩国）
    #[serde(rename = "ko-KR", alias = "ko")]
    KoKr,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::KoKr => "ko-KR",
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &ko_kr::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::KoKr => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

// ============================================================================
// 领域对象的本地化文本
// ============================================================================

/// 标签页名称
pub fn tab_label(record_type: RecordType) -> &'static str {
    let tabs = &t().tabs;
    match record_type {
        RecordType::Article => tabs.articles,
        RecordType::Account => tabs.accounts,
    }
}

/// 行操作名称
pub fn row_action_label(action: RowAction) -> &'static str {
    let actions = &t().actions;
    match action {
        RowAction::Edit => actions.edit,
        RowAction::Delete => actions.delete,
        RowAction::Status(StatusAction::Publish) => actions.publish,
        RowAction::Status(StatusAction::Archive) => actions.archive,
        RowAction::Status(StatusAction::Restore) => actions.restore,
    }
}

/// 通知文本
///
/// 失败通知优先显示错误自带的消息。
pub fn notice_text(notice: &Notice) -> String {
    let n = &t().notices;
    let text = match notice {
        Notice::Created(RecordType::Account) => n.account_created,
        Notice::Created(RecordType::Article) => n.article_created,
        Notice::Updated(RecordType::Account) => n.account_updated,
        Notice::Updated(RecordType::Article) => n.article_updated,
        Notice::Deleted => n.deleted,
        Notice::Transitioned(StatusAction::Publish) => n.published,
        Notice::Transitioned(StatusAction::Archive) => n.archived,
        Notice::Transitioned(StatusAction::Restore) => n.restored,
        Notice::Failed {
            reason: Some(reason),
            ..
        } => return reason.clone(),
        Notice::Failed {
            operation,
            reason: None,
        } => match operation {
            Operation::Load => n.load_failed,
            Operation::Create => n.create_failed,
            Operation::Update => n.update_failed,
            Operation::Delete => n.delete_failed,
            Operation::StatusAction => n.action_failed,
        },
    };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_column_key_has_a_label() {
        for lang in [Language::EnUs, Language::KoKr] {
            let texts = match lang {
                Language::EnUs => &en_us::TRANSLATIONS,
                Language::KoKr => &ko_kr::TRANSLATIONS,
            };
            for &record_type in RecordType::all() {
                let kind = record_type.kind();
                for column in kind.columns() {
                    assert!(
                        texts.fields.get(column.key).is_some(),
                        "{} missing column {}",
                        lang.code(),
                        column.key
                    );
                }
                for field in kind.form_fields() {
                    assert!(texts.fields.get(field.key).is_some());
                }
                for metric in kind.statistics(&[]).metrics {
                    assert!(texts.stats.get(metric.key).is_some());
                }
            }
        }
    }

    #[test]
    fn language_codes_parse_from_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let parsed: Wrapper = toml::from_str(r#"language = "ko-KR""#).unwrap();
        assert_eq!(parsed.language, Language::KoKr);
        let parsed: Wrapper = toml::from_str(r#"language = "en""#).unwrap();
        assert_eq!(parsed.language, Language::EnUs);
    }
}
