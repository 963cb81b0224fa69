//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let notifications = app.screen.notifications();
    let banner_rows = u16::from(notifications.success().is_some())
        + u16::from(notifications.error().is_some());

    // 标题栏 + 标签页 + 统计 + 通知 + 表格 + 状态栏
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(banner_rows),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(frame, rows[0]);
    components::tabs::render(app, frame, rows[1]);
    components::stats::render(app, frame, rows[2]);
    components::notice::render(app, frame, rows[3]);
    pages::records::render(app, frame, rows[4]);
    components::statusbar::render(app, frame, rows[5]);

    // 弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let title = Paragraph::new(Line::from(vec![
        Span::raw(format!(" {} ", texts.common.app_name)),
        Span::styled(
            format!(" {}", texts.common.subtitle),
            Style::default().fg(c.border),
        ),
    ]))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
