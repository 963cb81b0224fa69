//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!     · poll_event      事件轮询，受 app.rs 调用
//!     · handle_event    事件分发
//!
//!         当接收到键盘事件时：
//!             - 有弹窗打开时，调用 handle_modal_keys 处理
//!             - 否则按 keymap.rs 中的全局快捷键与列表按键处理
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
