//! 弹窗/对话框状态

use admin_console_core::types::{RecordId, RecordType};

/// 表单用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 新建 / 编辑表单，字段值在 EntityScreen 的表单缓冲区中
    Form {
        mode: FormMode,
        /// 当前焦点字段索引
        focus: usize,
    },

    /// 删除确认
    ConfirmDelete {
        record_type: RecordType,
        id: RecordId,
        /// 显示给用户的记录名
        name: String,
        /// 0 = 取消, 1 = 删除
        focus: usize,
    },

    /// 帮助
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_form(&mut self, mode: FormMode) {
        self.active = Some(Modal::Form { mode, focus: 0 });
    }

    pub fn show_confirm_delete(&mut self, record_type: RecordType, id: RecordId, name: String) {
        self.active = Some(Modal::ConfirmDelete {
            record_type,
            id,
            name,
            focus: 0,
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
