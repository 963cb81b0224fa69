//! 事件处理器

use std::time::Duration;

use admin_console_core::types::RecordType;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::NEXT_TAB.matches(&key) {
        return AppMessage::NextTab;
    }
    if DefaultKeymap::TAB_ARTICLES.matches(&key) {
        return AppMessage::SwitchTab(RecordType::Article);
    }
    if DefaultKeymap::TAB_ACCOUNTS.matches(&key) {
        return AppMessage::SwitchTab(RecordType::Account);
    }
    if DefaultKeymap::DISMISS_SUCCESS.matches(&key) {
        return AppMessage::DismissSuccess;
    }
    if DefaultKeymap::DISMISS_ERROR.matches(&key) {
        return AppMessage::DismissError;
    }

    handle_content_keys(key)
}

/// 处理记录表格的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::ACTION_ADD.matches(&key) {
        ContentMessage::Add
    } else if DefaultKeymap::ACTION_EDIT.matches(&key) {
        ContentMessage::Edit
    } else if DefaultKeymap::ACTION_DELETE.matches(&key) {
        ContentMessage::Delete
    } else if DefaultKeymap::ACTION_STATUS.matches(&key) {
        ContentMessage::StatusAction
    } else {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
            KeyCode::Home => ContentMessage::SelectFirst,
            KeyCode::End => ContentMessage::SelectLast,
            KeyCode::Enter => ContentMessage::Edit,
            _ => return AppMessage::Noop,
        }
    };
    AppMessage::Content(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let msg = match modal {
        Modal::Form { .. } => handle_form_keys(key),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Char('q' | '?') => Some(ModalMessage::Close),
            _ => None,
        },
    };

    msg.map_or(AppMessage::Noop, AppMessage::Modal)
}

/// 表单弹窗
fn handle_form_keys(key: KeyEvent) -> Option<ModalMessage> {
    if DefaultKeymap::MODAL_NEWLINE.matches(&key) {
        return Some(ModalMessage::Newline);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(ModalMessage::PrevField),
        KeyCode::Left => Some(ModalMessage::PrevOption),
        KeyCode::Right => Some(ModalMessage::NextOption),
        KeyCode::Enter => Some(ModalMessage::Confirm),
        KeyCode::Backspace => Some(ModalMessage::Backspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(ModalMessage::Input(c))
        }
        _ => None,
    }
}

/// 删除确认弹窗
fn handle_confirm_delete_keys(key: KeyEvent) -> Option<ModalMessage> {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            Some(ModalMessage::ToggleDeleteFocus)
        }
        KeyCode::Enter => Some(ModalMessage::Confirm),
        KeyCode::Char('n') => Some(ModalMessage::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn content_keys_map_to_actions() {
        assert!(matches!(
            handle_content_keys(press(KeyCode::Char('p'), KeyModifiers::NONE)),
            AppMessage::Content(ContentMessage::StatusAction)
        ));
        assert!(matches!(
            handle_content_keys(press(KeyCode::Enter, KeyModifiers::NONE)),
            AppMessage::Content(ContentMessage::Edit)
        ));
        assert!(matches!(
            handle_content_keys(press(KeyCode::Char('z'), KeyModifiers::NONE)),
            AppMessage::Noop
        ));
    }

    #[test]
    fn form_captures_typed_characters() {
        let form = Modal::Form {
            mode: crate::model::FormMode::Create,
            focus: 0,
        };
        // 'q' 在表单中是输入，不是退出
        assert!(matches!(
            handle_modal_keys(press(KeyCode::Char('q'), KeyModifiers::NONE), &form),
            AppMessage::Modal(ModalMessage::Input('q'))
        ));
        assert!(matches!(
            handle_modal_keys(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &form),
            AppMessage::Modal(ModalMessage::Input('A'))
        ));
        assert!(matches!(
            handle_modal_keys(press(KeyCode::Enter, KeyModifiers::ALT), &form),
            AppMessage::Modal(ModalMessage::Newline)
        ));
        assert!(matches!(
            handle_modal_keys(press(KeyCode::Esc, KeyModifiers::NONE), &form),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn shifted_question_mark_opens_help() {
        assert!(DefaultKeymap::HELP.matches(&press(KeyCode::Char('?'), KeyModifiers::SHIFT)));
    }
}
