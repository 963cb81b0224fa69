//! 底部状态栏组件

use admin_console_core::screen::RowAction;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    match &app.modal.active {
        Some(Modal::Form { .. }) => vec![
            ("Tab", h.next_field),
            ("←→", h.choose),
            ("Enter", h.submit),
            ("Alt+Enter", h.newline),
            ("Esc", h.close),
        ],
        Some(Modal::ConfirmDelete { .. }) => {
            vec![("←→", h.choose), ("Enter", h.submit), ("Esc", h.close)]
        }
        Some(Modal::Help) => vec![("Esc", h.close)],
        None => {
            let mut hints = vec![
                ("↑↓", h.select),
                ("Tab", h.switch_tab),
                ("a", h.add),
                ("e", h.edit),
                ("d", h.delete),
            ];
            let has_workflow = app.selected_record().is_some_and(|record| {
                app.screen
                    .row_actions(record)
                    .iter()
                    .any(|action| matches!(action, RowAction::Status(_)))
            });
            if has_workflow {
                hints.push(("p", h.workflow));
            }
            hints.push(("r", h.refresh));
            hints.push(("?", h.help));
            hints.push(("q", h.quit));
            hints
        }
    }
}
