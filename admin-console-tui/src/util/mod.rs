//! 工具模块

mod terminal;
mod text;

pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::truncate;
