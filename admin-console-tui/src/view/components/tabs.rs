//! 记录类型标签页

use admin_console_core::types::RecordType;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::i18n::{t, tab_label};
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let titles: Vec<Line> = RecordType::all()
        .iter()
        .enumerate()
        .map(|(i, &record_type)| Line::from(format!("{} {}", i + 1, tab_label(record_type))))
        .collect();
    let selected = RecordType::all()
        .iter()
        .position(|&r| r == app.screen.record_type())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(c.muted))
        .highlight_style(Styles::selected())
        .divider("│");
    frame.render_widget(tabs, area);

    // 右侧显示新建按钮提示
    let hint = format!("a: {} ", t().common.create);
    let width = u16::try_from(hint.chars().count()).unwrap_or(area.width);
    if width < area.width {
        let hint_area = Rect::new(area.x + area.width - width, area.y, width, 1);
        frame.render_widget(Paragraph::new(hint).style(Styles::hint_key()), hint_area);
    }
}
