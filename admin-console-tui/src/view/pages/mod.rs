//! 页面渲染

pub mod records;
