//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 记录列表、对话框、表单与通知都由 admin-console-core 的 `EntityScreen`
//! 持有；这里只补充终端界面自己的状态（光标、弹窗焦点、退出标志）。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,          // 退出标志
//!             pub backend: Backend,           // 服务上下文 + 运行时
//!             pub screen: EntityScreen,       // 实体管理界面状态
//!             pub cursor: usize,              // 表格中选中的行
//!             pub modal: ModalState,          // 弹窗状态
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(backend, tab);
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/modal.rs 中定义：
//!
//!         Modal 枚举：
//!             - Form { mode, focus }                      新建 / 编辑表单
//!             - ConfirmDelete { record_type, id, name, focus }
//!             - Help
//!
//!         表单的字段值保存在 EntityScreen 的表单缓冲区中，
//!         Modal::Form 只记录当前焦点所在的字段。
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{FormMode, Modal, ModalState};
