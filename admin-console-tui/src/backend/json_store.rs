//! JSON 文件读写

use std::path::{Path, PathBuf};

use admin_console_core::{CoreError, CoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

/// 单个 JSON 数组文件
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取文件；文件不存在时返回 `None`
    pub async fn load<T: DeserializeOwned>(&self) -> CoreResult<Option<Vec<T>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::LoadFailure(e.to_string()))?;

        let items = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        Ok(Some(items))
    }

    /// 覆盖写入，必要时创建父目录
    pub async fn save<T: Serialize>(&self, items: &[T]) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        tracing::debug!("Saved {} records to {}", items.len(), self.path.display());
        Ok(())
    }
}
