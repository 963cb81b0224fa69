//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift（大写字母与 `?` 都带 Shift）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::char('q');
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::char('?');
    pub const REFRESH: KeyBinding = KeyBinding::char('r');

    // 标签页
    pub const NEXT_TAB: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const TAB_ARTICLES: KeyBinding = KeyBinding::char('1');
    pub const TAB_ACCOUNTS: KeyBinding = KeyBinding::char('2');

    // 通知
    pub const DISMISS_SUCCESS: KeyBinding = KeyBinding::char('s');
    pub const DISMISS_ERROR: KeyBinding = KeyBinding::char('x');

    // 操作
    pub const ACTION_ADD: KeyBinding = KeyBinding::char('a');
    pub const ACTION_EDIT: KeyBinding = KeyBinding::char('e');
    pub const ACTION_DELETE: KeyBinding = KeyBinding::char('d');
    pub const ACTION_STATUS: KeyBinding = KeyBinding::char('p');

    // 弹窗
    pub const MODAL_NEWLINE: KeyBinding = KeyBinding::alt(KeyCode::Enter);
}
