//! 内容面板消息
//!
//! 记录表格中的操作：选择、增删改、工作流

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== CRUD 操作 ==========
    /// 新建记录
    Add,
    /// 编辑当前选中项
    Edit,
    /// 删除当前选中项
    Delete,

    /// 对选中文章执行唯一可用的工作流操作
    StatusAction,
}
