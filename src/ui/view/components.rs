//! 通用 UI 组件
//!
//! 对话框、输入框、柱状条等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::theme::Palette;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    palette: &Palette,
    accent: Color,
) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(palette.bg).fg(palette.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    palette: &Palette,
) {
    let (text_style, border_style) = if is_focused {
        (
            Style::default()
                .fg(palette.border_focused)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(palette.border_focused),
        )
    } else {
        (
            Style::default().fg(palette.text),
            Style::default().fg(palette.border),
        )
    };

    let shown = if is_focused {
        format!("{value}▏")
    } else {
        value.to_string()
    };

    let input = Paragraph::new(shown)
        .style(text_style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(input, area);
}

/// [组件] 单个柱状条：上方是下标，下方是带底色的数值方块
pub fn render_bar(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    value: i64,
    color: Color,
    palette: &Palette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let label = Paragraph::new(index.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted_text));
    frame.render_widget(label, rows[0]);

    let box_area = Rect {
        x: rows[1].x.saturating_add(1),
        width: rows[1].width.saturating_sub(2),
        ..rows[1]
    };
    if box_area.is_empty() {
        return;
    }
    let block = Block::default().style(Style::default().bg(color));
    let inner_height = box_area.height;
    frame.render_widget(block, box_area);

    // 数值垂直居中
    let value_area = Rect {
        y: box_area.y + inner_height / 2,
        height: inner_height.min(1),
        ..box_area
    };
    let text = Paragraph::new(value.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.bar_text)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(text, value_area);
}
