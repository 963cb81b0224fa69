//! 配置文件
//!
//! 位置：`<config_dir>/admin-console/config.toml`，文件不存在时使用默认值。
//!
//! ```toml
//! language = "ko-KR"
//! data_dir = "/var/lib/admin-console"
//! log_level = "debug"
//! default_tab = "accounts"
//! ```

use std::path::{Path, PathBuf};

use admin_console_core::types::RecordType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

const APP_DIR: &str = "admin-console";
const CONFIG_FILE: &str = "config.toml";

/// 启动时读取的配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub language: Language,
    /// 数据文件与日志目录
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
    /// `articles` 或 `accounts`
    pub default_tab: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            data_dir: None,
            log_level: "info".to_string(),
            default_tab: "articles".to_string(),
        }
    }
}

impl AppConfig {
    /// 默认配置文件路径
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(CONFIG_FILE)
    }

    /// 从默认位置加载
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// 从指定文件加载，文件不存在时返回默认值
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        config.default_tab()?;
        Ok(config)
    }

    /// 启动时显示的记录类型
    pub fn default_tab(&self) -> Result<RecordType> {
        self.default_tab
            .parse()
            .with_context(|| format!("invalid default_tab: {}", self.default_tab))
    }

    /// 数据目录（未配置时使用系统数据目录）
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_tab().unwrap(), RecordType::Article);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"ko-KR\"\ndefault_tab = \"accounts\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.language, Language::KoKr);
        assert_eq!(config.default_tab().unwrap(), RecordType::Account);
        assert_eq!(config.log_level, "info");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "language = [").unwrap();
        assert!(AppConfig::load_from(&path).is_err());

        std::fs::write(&path, "default_tab = \"comments\"").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
