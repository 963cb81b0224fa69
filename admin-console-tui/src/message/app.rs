//! 应用主消息枚举

use admin_console_core::types::RecordType;

use super::{ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换到指定记录类型的标签页
    SwitchTab(RecordType),

    /// 切换到另一个标签页
    NextTab,

    /// 记录表格相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 重新加载当前标签页
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 关闭成功通知
    DismissSuccess,

    /// 关闭错误通知
    DismissError,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
