//! 应用主状态结构

use admin_console_core::types::{Record, RecordType};
use admin_console_core::EntityScreen;

use super::ModalState;
use crate::backend::Backend;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 服务上下文 + 运行时
    pub backend: Backend,

    /// 实体管理界面状态
    pub screen: EntityScreen,

    /// 表格中选中的行
    pub cursor: usize,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(backend: Backend, record_type: RecordType) -> Self {
        let screen = EntityScreen::with_record_type(backend.context(), record_type);
        Self {
            should_quit: false,
            backend,
            screen,
            cursor: 0,
            modal: ModalState::new(),
        }
    }

    /// 首次加载
    pub fn mount(&mut self) {
        self.backend.block_on(self.screen.mount());
        self.clamp_cursor();
    }

    /// 光标所在的记录
    pub fn selected_record(&self) -> Option<&Record> {
        self.screen.records().get(self.cursor)
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.screen.records().len() {
            self.cursor += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.screen.records().len().saturating_sub(1);
    }

    /// 列表变化后保持光标在范围内
    pub fn clamp_cursor(&mut self) {
        let len = self.screen.records().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
