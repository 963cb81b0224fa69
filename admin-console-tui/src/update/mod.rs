//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 记录表格子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!     需要调用服务的操作（加载、新建、删除……）交给 `EntityScreen`，
//!     通过 `app.backend.block_on(...)` 同步等待其完成。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;

use admin_console_core::types::RecordType;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::SwitchTab(record_type) => switch_tab(app, record_type),

        AppMessage::NextTab => {
            let next = app.screen.record_type().toggle();
            switch_tab(app, next);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Refresh => {
            app.backend.block_on(app.screen.load());
            app.clamp_cursor();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::DismissSuccess => app.screen.dismiss_success(),
        AppMessage::DismissError => app.screen.dismiss_error(),

        AppMessage::Noop => {}
    }
}

fn switch_tab(app: &mut App, record_type: RecordType) {
    tracing::debug!("Switching to {record_type}");
    app.modal.close();
    app.backend.block_on(app.screen.switch_type(record_type));
    app.cursor = 0;
}
