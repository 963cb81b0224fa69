//! Admin Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Admin Console TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     AppConfig::load()       // 读取 ~/.config/admin-console/config.toml
//!     init_logging()          // 日志写入数据目录下的 logs/
//!     Backend::open()         // 打开 JSON 数据文件（首次运行时写入示例数据）
//!     model::App::new()       // 创建 APP 实例并加载默认标签页
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 终端进入 raw 模式前完成所有可能失败的初始化，
//! 这样配置或数据文件出错时错误信息能正常打印到终端。

mod app;
mod backend;
mod config;
mod event;
mod i18n;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use config::AppConfig;
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置
    let config = AppConfig::load()?;
    i18n::set_language(config.language);
    let default_tab = config.default_tab()?;

    // 2. 初始化日志
    let data_dir = config.data_dir();
    logging::init_logging(&data_dir.join("logs"), &config.log_level)?;
    tracing::info!(
        "Starting admin console ({}), data dir: {}",
        config.language.code(),
        data_dir.display()
    );

    // 3. 打开数据文件，创建应用实例
    let backend = backend::Backend::open(&data_dir)?;
    let mut app = model::App::new(backend, default_tab);
    app.mount();

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Admin console exited");
    result
}
