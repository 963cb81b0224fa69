//! 记录表格

use admin_console_core::screen::{Cell as RecordCell, Column, RowAction};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::{row_action_label, t, tab_label};
use crate::model::App;
use crate::util::truncate;
use crate::view::theme::{colors, Styles};

/// 弹性列的最小宽度
const FLEX_MIN_WIDTH: u16 = 16;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let records = app.screen.records();

    let block = Block::default()
        .title(format!(
            " {} ({}) ",
            tab_label(app.screen.record_type()),
            records.len()
        ))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    if records.is_empty() {
        let empty = Paragraph::new(Line::styled(
            format!("  {}", texts.common.no_data),
            Style::default().fg(c.muted),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let columns = app.screen.columns();
    let widths: Vec<u16> = columns.iter().map(column_width).collect();

    let header = Row::new(columns.iter().map(|column| {
        Cell::from(texts.fields.get(column.key).unwrap_or(column.header))
    }))
    .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD));

    let rows = records.iter().map(|record| {
        Row::new(columns.iter().zip(&widths).map(|(column, &width)| {
            match app.screen.render_cell(record, column) {
                RecordCell::Text(text) => {
                    let text = texts.values.display(&text).to_string();
                    Cell::from(truncate(&text, usize::from(width)))
                }
                RecordCell::Actions(actions) => Cell::from(action_line(&actions)),
            }
        }))
        .style(Style::default().fg(c.fg))
    });

    let constraints = columns.iter().zip(&widths).map(|(column, &width)| {
        if column.width.is_some() {
            Constraint::Length(width)
        } else {
            Constraint::Min(width)
        }
    });

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(table, area, &mut state);
}

fn column_width(column: &Column) -> u16 {
    column.width.unwrap_or(FLEX_MIN_WIDTH)
}

/// 行操作显示为快捷键提示，例如 `[e]Edit [d]Delete [p]Publish`
fn action_line(actions: &[RowAction]) -> Line<'static> {
    let mut spans = Vec::new();
    for action in actions {
        let key = match action {
            RowAction::Edit => "e",
            RowAction::Delete => "d",
            RowAction::Status(_) => "p",
        };
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::hint_key()));
        spans.push(Span::raw(row_action_label(*action)));
    }
    Line::from(spans)
}
