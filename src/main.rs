use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use search_visualizer::cli::Cli;
use search_visualizer::error::AppError;
use search_visualizer::logging::{LogConfig, init_logging};
use search_visualizer::storage::{
    LOG_FILE_NAME, SETTINGS_FILE_NAME, data_dir, load_settings_or_default, save_settings,
    settings_to_persist,
};
use search_visualizer::ui::{self, App, render};

/// 事件轮询间隔，同时决定动画刷新频率
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // 数据目录 (~/.local/share/search-visualizer/)
    let data_dir = data_dir()?;
    let settings_path = data_dir.join(SETTINGS_FILE_NAME);
    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| data_dir.join(LOG_FILE_NAME));
    init_logging(&LogConfig::from_verbosity(cli.verbose, log_file))?;
    tracing::info!("starting search visualizer");

    // 加载设置，命令行参数优先
    let saved = load_settings_or_default(&settings_path);
    let mut settings = saved.clone();
    cli.apply_to(&mut settings);
    let session_start = settings.clone();

    let mut app = App::new(settings);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }

    // 仅在会话中有改动时保存，命令行参数不写入
    if let Some(to_save) = settings_to_persist(&saved, &session_start, &app.settings()) {
        save_settings(&to_save, &settings_path)?;
    }
    tracing::info!("exiting");

    result.map_err(AppError::from)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.poll_run();
        terminal.draw(|f| render(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
