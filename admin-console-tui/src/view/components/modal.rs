//! 弹窗组件

use admin_console_core::screen::{FieldInput, FormField};
use admin_console_core::types::{Record, RecordType};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FormMode, Modal};
use crate::view::theme::{colors, Styles};

/// 表单弹窗宽度
const FORM_WIDTH: u16 = 60;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Form { mode, focus } => render_form(app, frame, *mode, *focus),
        Modal::ConfirmDelete { name, focus, .. } => render_confirm_delete(frame, name, *focus),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框
fn modal_block(title: &str, border: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black))
}

/// 渲染新建 / 编辑表单
fn render_form(app: &App, frame: &mut Frame, mode: FormMode, focus: usize) {
    let texts = t();
    let c = colors();
    let kind = app.screen.kind();
    let is_account = app.screen.record_type() == RecordType::Account;

    let title = match (mode, is_account) {
        (FormMode::Create, true) => texts.modal.new_account,
        (FormMode::Create, false) => texts.modal.new_article,
        (FormMode::Edit, true) => texts.modal.edit_account,
        (FormMode::Edit, false) => texts.modal.edit_article,
    };

    let mut lines = Vec::new();

    // 编辑时显示只读信息
    if mode == FormMode::Edit {
        if let Some(record) = app.screen.selected() {
            lines.push(Line::styled(info_line(record), Style::default().fg(c.muted)));
            lines.push(Line::from(""));
        }
    }

    for (i, field) in kind.form_fields().iter().enumerate() {
        let focused = i == focus;
        let default = kind
            .defaults()
            .iter()
            .find(|(key, _)| *key == field.key)
            .map(|(_, value)| *value);
        lines.extend(field_lines(app, field, focused, default));
        lines.push(Line::from(""));
    }

    // 按钮
    let submit = match mode {
        FormMode::Create => texts.common.create,
        FormMode::Edit => texts.modal.update,
    };
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", Styles::hint_key()),
        Span::styled(submit, Style::default().fg(c.success)),
        Span::raw("    "),
        Span::styled("[Esc] ", Styles::hint_key()),
        Span::styled(texts.common.cancel, Style::default().fg(c.muted)),
    ]));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(FORM_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .block(modal_block(title, c.border_focused))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 编辑弹窗的信息行：ID | 创建时间 | 浏览量
fn info_line(record: &Record) -> String {
    let fields = &t().fields;
    let mut parts = vec![format!("{} {}", fields.id, record.id())];
    if let Some(created) = record.field("createdAt") {
        parts.push(format!("{} {created}", fields.created_at));
    }
    if let Some(article) = record.as_article() {
        parts.push(format!("{} {}", fields.views, article.views));
    }
    parts.join(" | ")
}

/// 单个字段：标签行 + 值行
fn field_lines(
    app: &App,
    field: &FormField,
    focused: bool,
    default: Option<&'static str>,
) -> Vec<Line<'static>> {
    let texts = t();
    let c = colors();

    let label = texts.fields.get(field.key).unwrap_or(field.label);
    let mut label_spans = vec![Span::styled(label, Style::default().fg(Color::Gray))];
    if field.required {
        label_spans.push(Span::styled(
            format!(" {}", texts.modal.required),
            Style::default().fg(c.error),
        ));
    }
    if focused && matches!(field.input, FieldInput::Choice(_)) {
        label_spans.push(Span::styled(
            format!(" ({})", texts.modal.select_hint),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let value_style = if focused {
        Style::default().fg(c.border_focused).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let current = app.screen.form().get(field.key).unwrap_or_default();

    let mut lines = vec![Line::from(label_spans)];
    match field.input {
        FieldInput::Choice(_) => {
            // 空值显示默认值（暗色）
            let (value, style) = match (current.trim(), default) {
                ("", Some(default)) => (default, Style::default().fg(Color::DarkGray)),
                (value, _) => (value, value_style),
            };
            let shown = if value.is_empty() {
                "-".to_string()
            } else {
                texts.values.display(value).to_string()
            };
            let (left, right) = if focused { ("◀", "▶") } else { (" ", " ") };
            lines.push(Line::styled(format!("  {left} {shown} {right}"), style));
        }
        FieldInput::Text | FieldInput::Multiline => {
            let mut text_lines: Vec<String> = current.split('\n').map(str::to_string).collect();
            if focused {
                if let Some(last) = text_lines.last_mut() {
                    last.push('▎');
                }
            }
            for text in text_lines {
                lines.push(Line::styled(format!("  {text}"), value_style));
            }
        }
    }
    lines
}

/// 渲染删除确认弹窗
fn render_confirm_delete(frame: &mut Frame, name: &str, focus: usize) {
    let texts = &t().modal.confirm_delete;
    let c = colors();

    let area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let button = |label: &'static str, selected: bool, color: Color| {
        if selected {
            Span::styled(format!(" {label} "), Style::default().bg(color).fg(Color::Black))
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(color))
        }
    };

    let lines = vec![
        Line::from(Span::styled(texts.message, Style::default().fg(c.fg))),
        Line::from(Span::styled(
            name.to_string(),
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            button(texts.cancel, focus == 0, c.muted),
            Span::raw("    "),
            button(texts.delete, focus == 1, c.error),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(modal_block(texts.title, c.error));
    frame.render_widget(paragraph, area);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().help;

    let lines: Vec<Line> = help
        .entries
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), Styles::hint_key()),
                Span::styled(*desc, Styles::hint_desc()),
            ])
        })
        .collect();

    let height = u16::try_from(help.entries.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(modal_block(help.title, colors().info)),
        area,
    );
}
