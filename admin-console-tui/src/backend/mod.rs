//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，持有 admin-console-core 的 [`ServiceContext`]
//! 以及驱动异步调用的 tokio 运行时。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod json_store;         // JSON 文件读写
//!         mod account_service;    // 账户服务（accounts.json）
//!         mod article_service;    // 文章服务（articles.json）
//!         mod seed;               // 首次启动的示例数据
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在弹窗中按 Enter 确认
//!         ↓
//!     Update 层处理 ModalMessage::Confirm
//!         ↓
//!     backend.block_on(app.screen.create())
//!         ↓
//!     EntityScreen 通过 ServiceContext 调用 JsonAccountService / JsonArticleService
//!         ↓
//!     内存状态更新，写回 JSON 文件，重新加载列表
//!         ↓
//!     View 层重新渲染
//!

mod account_service;
mod article_service;
mod json_store;
pub(crate) mod seed;

pub use account_service::JsonAccountService;
pub use article_service::JsonArticleService;
pub use json_store::JsonFile;

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use admin_console_core::ServiceContext;
use anyhow::Result;
use tokio::runtime::{Builder, Runtime};

/// 服务上下文 + 运行时
pub struct Backend {
    runtime: Runtime,
    ctx: Arc<ServiceContext>,
}

impl Backend {
    /// 打开数据目录下的 `accounts.json` / `articles.json`
    pub fn open(data_dir: &Path) -> Result<Self> {
        let runtime = Self::runtime()?;
        let ctx = runtime.block_on(async {
            let accounts = JsonAccountService::open(JsonFile::new(data_dir.join("accounts.json"))).await?;
            let articles = JsonArticleService::open(JsonFile::new(data_dir.join("articles.json"))).await?;
            anyhow::Ok(ServiceContext::new(Arc::new(accounts), Arc::new(articles)))
        })?;

        tracing::info!("Backend opened at {}", data_dir.display());
        Ok(Self {
            runtime,
            ctx: Arc::new(ctx),
        })
    }

    /// 使用已有的服务上下文
    pub fn with_context(ctx: Arc<ServiceContext>) -> Result<Self> {
        Ok(Self {
            runtime: Self::runtime()?,
            ctx,
        })
    }

    pub fn context(&self) -> Arc<ServiceContext> {
        Arc::clone(&self.ctx)
    }

    /// 在运行时上执行异步调用直到完成
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn runtime() -> Result<Runtime> {
        Ok(Builder::new_current_thread().enable_all().build()?)
    }
}

#[cfg(test)]
mod tests {
    use admin_console_core::types::RecordType;

    use super::*;

    #[test]
    fn open_seeds_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Backend::open(dir.path()).unwrap();

        assert!(dir.path().join("accounts.json").exists());
        assert!(dir.path().join("articles.json").exists());

        let ctx = backend.context();
        let accounts = backend.block_on(ctx.fetch(RecordType::Account)).unwrap();
        let articles = backend.block_on(ctx.fetch(RecordType::Article)).unwrap();
        assert_eq!(accounts.len(), 5);
        assert_eq!(articles.len(), 4);
    }
}
