//! 日志初始化
//!
//! 终端被 UI 占用，日志写入数据目录下按天滚动的文件。
//! 核心库通过 `log` 输出的记录会桥接到 tracing。

use std::path::Path;

use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名前缀
pub const LOG_FILENAME: &str = "admin-console.log";

/// 初始化日志；`RUST_LOG` 优先于配置中的级别
pub fn init_logging(log_dir: &Path, level: &str) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILENAME);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "admin_console={level},admin_console_core={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_target(true)
                .with_ansi(false),
        )
        .with(env_filter)
        .try_init()?;

    Ok(())
}
