//! 弹窗更新逻辑

use admin_console_core::screen::{FieldInput, FormField};

use crate::message::ModalMessage;
use crate::model::{App, FormMode, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::Form { .. }) => handle_form(app, msg),
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Help) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
        }
        None => {}
    }
}

/// 处理新建 / 编辑表单
fn handle_form(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Form { mode, focus }) = app.modal.active.as_mut() else {
        return;
    };
    let mode = *mode;
    let kind = app.screen.kind();
    let fields = kind.form_fields();
    let Some(field) = fields.get(*focus).copied() else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.screen.close_dialog();
            app.modal.close();
        }

        ModalMessage::NextField => {
            *focus = (*focus + 1) % fields.len();
        }

        ModalMessage::PrevField => {
            *focus = (*focus + fields.len() - 1) % fields.len();
        }

        ModalMessage::PrevOption => cycle_option(app, field, false),
        ModalMessage::NextOption => cycle_option(app, field, true),

        ModalMessage::Input(ch) => {
            if !matches!(field.input, FieldInput::Choice(_)) {
                edit_text(app, field, |value| value.push(ch));
            }
        }

        ModalMessage::Newline => {
            if field.input == FieldInput::Multiline {
                edit_text(app, field, |value| value.push('\n'));
            }
        }

        ModalMessage::Backspace => {
            if !matches!(field.input, FieldInput::Choice(_)) {
                edit_text(app, field, |value| {
                    value.pop();
                });
            }
        }

        ModalMessage::Confirm => {
            match mode {
                FormMode::Create => app.backend.block_on(app.screen.create()),
                FormMode::Edit => app.backend.block_on(app.screen.update()),
            };
            // 失败时对话框保持打开，错误显示在通知中
            if !app.screen.is_create_open() && !app.screen.is_edit_open() {
                app.modal.close();
            }
            app.clamp_cursor();
        }

        ModalMessage::ToggleDeleteFocus => {}
    }
}

fn edit_text(app: &mut App, field: FormField, edit: impl FnOnce(&mut String)) {
    let mut value = app.screen.form().get(field.key).unwrap_or_default().to_string();
    edit(&mut value);
    app.screen.set_field(field.key, value);
}

/// 在选项字段的可选值之间循环；空值从默认值开始
fn cycle_option(app: &mut App, field: FormField, forward: bool) {
    let FieldInput::Choice(options) = field.input else {
        return;
    };
    if options.is_empty() {
        return;
    }

    let kind = app.screen.kind();
    let current = app.screen.form().value(field.key).or_else(|| {
        kind.defaults()
            .iter()
            .find(|(key, _)| *key == field.key)
            .map(|(_, value)| *value)
    });
    let position = current.and_then(|value| options.iter().position(|o| *o == value));

    let next = match (position, forward) {
        (None, true) => 0,
        (None, false) => options.len() - 1,
        (Some(i), true) => (i + 1) % options.len(),
        (Some(i), false) => (i + options.len() - 1) % options.len(),
    };
    app.screen.set_field(field.key, options[next]);
}

/// 处理删除确认
///
/// 用户的选择作为删除确认的答案交给 `EntityScreen::delete`。
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete { id, focus, .. }) = app.modal.active.as_mut() else {
        return;
    };
    let id = *id;

    let answer = match msg {
        ModalMessage::ToggleDeleteFocus => {
            *focus = 1 - *focus;
            return;
        }
        ModalMessage::Confirm => *focus == 1,
        ModalMessage::Close => false,
        _ => return,
    };

    app.modal.close();
    app.backend.block_on(app.screen.delete(id, &answer));
    app.clamp_cursor();
}
