//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Char('a') => Some(Action::NextAlgorithm),
            KeyCode::BackTab | KeyCode::Char('A') => Some(Action::PrevAlgorithm),
            KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::StartEditTarget),
            KeyCode::Enter | KeyCode::Char('s') => Some(Action::StartRun),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') | KeyCode::Right => {
                Some(Action::SpeedUp)
            }
            KeyCode::Char('-') | KeyCode::Char('h') | KeyCode::Left => Some(Action::SpeedDown),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        },
        AppMode::EditingTarget => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Alert(_) => match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::Dismiss),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
