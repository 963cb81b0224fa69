//! 成功 / 错误通知横幅

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::{notice_text, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let notifications = app.screen.notifications();

    let mut lines = Vec::new();
    if let Some(notice) = notifications.success() {
        lines.push(banner(texts.common.success, &notice_text(notice), "s", c.success));
    }
    if let Some(notice) = notifications.error() {
        lines.push(banner(texts.common.error, &notice_text(notice), "x", c.error));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn banner<'a>(title: &'a str, message: &str, key: &'a str, color: ratatui::style::Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(color)),
        Span::raw("  "),
        Span::styled(format!("[{key}]"), Styles::hint_key()),
        Span::styled(format!(" {}", t().hints.dismiss), Styles::hint_desc()),
    ])
}
