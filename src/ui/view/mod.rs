//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{Alert, App, AppMode, Severity};
use super::theme::{Palette, palette};
use crate::models::{Algorithm, BarState, ThemeKind};
use components::{render_bar, render_dialog_framework, render_input_widget};
use layouts::{bar_cells, centered_rect};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let palette = palette(app.theme);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.text)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题栏
            Constraint::Length(8), // 柱状条
            Constraint::Length(3), // 控制栏
            Constraint::Min(8),    // 图例 + 伪代码
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0], palette);
    render_bars(frame, app, chunks[1], palette);
    render_controls(frame, app, chunks[2], palette);
    render_details(frame, app, chunks[3], palette);
    render_help(frame, app, chunks[4], palette);

    if let AppMode::Alert(alert) = &app.mode {
        render_alert(frame, alert, palette);
    }
}

fn bordered<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(palette.muted_text)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
}

fn render_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let theme_icon = match app.theme {
        ThemeKind::Dark => "☀ light [t]",
        ThemeKind::Light => "☾ dark [t]",
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            "🔍 Search Visualizer",
            Style::default()
                .fg(palette.header_text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Interactive Algorithm Visualizer",
            Style::default().fg(palette.muted_text),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), columns[0]);
    frame.render_widget(
        Paragraph::new(theme_icon)
            .alignment(Alignment::Right)
            .style(Style::default().fg(palette.header_text)),
        columns[1],
    );
}

fn render_bars(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let block = bordered("ARRAY", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = bar_cells(inner, app.array.len());
    for (index, (cell, value)) in cells.iter().zip(app.array.values()).enumerate() {
        let state = app.bars.get(index).copied().unwrap_or_default();
        render_bar(
            frame,
            *cell,
            index,
            *value,
            palette.bar_color(state),
            palette,
        );
    }
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    // 算法选择
    let options: Vec<Span> = Algorithm::ALL
        .iter()
        .flat_map(|algorithm| {
            let style = if *algorithm == app.algorithm {
                Style::default()
                    .fg(palette.border_focused)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(palette.muted_text)
            };
            [
                Span::styled(format!(" {} ", algorithm.name()), style),
                Span::raw(" "),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(options)).block(bordered("ALGORITHM", palette)),
        columns[0],
    );

    // 搜索目标
    render_input_widget(
        frame,
        columns[1],
        "SEARCH TARGET",
        &app.target_input,
        app.mode == AppMode::EditingTarget,
        palette,
    );

    // 运行状态
    let (status, color) = if app.is_running() {
        ("● Running", palette.warning)
    } else {
        ("▶ Ready", palette.success)
    };
    frame.render_widget(
        Paragraph::new(status)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(bordered("CONTROLS", palette)),
        columns[2],
    );

    // 速度
    frame.render_widget(
        Paragraph::new(app.current_speed().to_string())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )
            .block(bordered("SPEED", palette)),
        columns[3],
    );
}

fn render_details(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(area);

    render_legend(frame, app, columns[0], palette);
    render_pseudocode(frame, app, columns[1], palette);
}

fn render_legend(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let entries = [
        (BarState::Current, "Current"),
        (BarState::Visited, "Visited"),
        (BarState::Found, "Found"),
        (BarState::Default, "Default"),
    ];

    let mut lines: Vec<Line> = entries
        .iter()
        .map(|(state, label)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(palette.bar_color(*state))),
                Span::styled(*label, Style::default().fg(palette.text)),
            ])
        })
        .collect();

    lines.push(Line::styled("─".repeat(22), Style::default().fg(palette.border)));
    lines.push(Line::styled(
        format!("Comparisons: {}", app.comparisons),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));
    if let Some(run) = &app.last_run {
        lines.push(Line::styled(
            format!("Last run: {}", run.finished_at.format("%H:%M:%S")),
            Style::default().fg(palette.muted_text),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).block(bordered("LEGEND", palette)),
        area,
    );
}

fn render_pseudocode(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let code = Paragraph::new(app.algorithm.pseudocode())
        .style(Style::default().fg(palette.code_fg).bg(palette.code_bg))
        .block(bordered("PSEUDOCODE", palette));
    frame.render_widget(code, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[i] target  [Enter] start  [r] reset  [Tab] algorithm  [+/-] speed  [t] theme  [q] quit"
        }
        AppMode::EditingTarget => "Type a number, [Enter] start  [Esc] done",
        AppMode::Alert(_) => "[Enter] OK",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(palette.muted_text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );

    frame.render_widget(help, area);
}

fn render_alert(frame: &mut Frame, alert: &Alert, palette: &Palette) {
    let area = centered_rect(50, 25, frame.area());
    let (icon, accent) = match alert.severity {
        Severity::Info => ("ℹ", palette.bar_default),
        Severity::Warning => ("⚠", palette.warning),
        Severity::Error => ("✗", palette.danger),
    };
    let title = format!("{} {}", icon, alert.title);
    let inner = render_dialog_framework(frame, area, &title, palette, accent);

    let dialog = Paragraph::new(format!("{}\n\n[Enter] OK", alert.message))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(palette.text));
    frame.render_widget(dialog, inner);
}
