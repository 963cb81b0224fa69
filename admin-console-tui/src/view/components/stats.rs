//! 统计卡片

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let stats = app.screen.statistics();

    let mut cards = vec![(texts.common.total, stats.total as u64, c.fg)];
    cards.extend(stats.metrics.iter().map(|m| {
        (
            texts.stats.get(m.key).unwrap_or(m.label),
            m.value,
            c.tone(m.tone),
        )
    }));

    let count = u32::try_from(cards.len()).unwrap_or(1);
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for ((label, value, color), card_area) in cards.into_iter().zip(areas.iter()) {
        let card = Paragraph::new(Line::from(vec![
            Span::styled(format!("{label} "), Style::default().fg(c.muted)),
            Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(c.border)),
        );
        frame.render_widget(card, *card_area);
    }
}
