//! 界面状态

mod modal;

pub use modal::{FormMode, Modal, ModalState};
