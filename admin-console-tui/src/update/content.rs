//! 内容面板更新逻辑
//!
//! 处理记录表格中的各种操作消息

use admin_console_core::screen::RowAction;
use admin_console_core::types::Record;
use admin_console_core::Outcome;

use crate::message::ContentMessage;
use crate::model::{App, FormMode};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => app.select_previous(),
        ContentMessage::SelectNext => app.select_next(),
        ContentMessage::SelectFirst => app.select_first(),
        ContentMessage::SelectLast => app.select_last(),

        // ========== CRUD 操作 ==========
        ContentMessage::Add => {
            app.screen.open_create();
            app.modal.show_form(FormMode::Create);
        }
        ContentMessage::Edit => handle_edit(app),
        ContentMessage::Delete => handle_delete(app),
        ContentMessage::StatusAction => handle_status_action(app),
    }
}

fn handle_edit(app: &mut App) {
    let Some(id) = app.selected_record().map(Record::id) else {
        return;
    };
    if app.screen.begin_edit(id) == Outcome::Completed {
        app.modal.show_form(FormMode::Edit);
    }
}

fn handle_delete(app: &mut App) {
    let Some(record) = app.selected_record() else {
        return;
    };
    let (record_type, id, name) = (record.record_type(), record.id(), display_name(record));
    app.modal.show_confirm_delete(record_type, id, name);
}

/// 执行行上提供的工作流操作（仅文章有）
fn handle_status_action(app: &mut App) {
    let Some(record) = app.selected_record() else {
        return;
    };
    let id = record.id();
    let action = app
        .screen
        .row_actions(record)
        .into_iter()
        .find_map(|action| match action {
            RowAction::Status(status_action) => Some(status_action),
            RowAction::Edit | RowAction::Delete => None,
        });

    if let Some(action) = action {
        app.backend.block_on(app.screen.status_action(id, action));
        app.clamp_cursor();
    }
}

/// 删除确认中显示的记录名
fn display_name(record: &Record) -> String {
    match record {
        Record::Account(account) => account.username.clone(),
        Record::Article(article) => article.title.clone(),
    }
}
