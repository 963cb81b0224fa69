//! 界面组件

pub mod modal;
pub mod notice;
pub mod stats;
pub mod statusbar;
pub mod tabs;
