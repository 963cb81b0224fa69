//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     src/view/mod.rs
//!         mod layout;         // 主布局
//!         mod theme;          // 颜色与样式
//!         mod components;     // 标签页、统计、通知、状态栏、弹窗
//!         mod pages;          // 记录表格
//!

mod components;
mod layout;
mod pages;
mod theme;

pub use layout::render;
