use ratatui::style::Color;

use crate::models::{BarState, ThemeKind};

/// 界面配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub muted_text: Color,
    pub header_text: Color,
    pub border: Color,
    pub border_focused: Color,
    pub bar_default: Color,
    pub bar_current: Color,
    pub bar_visited: Color,
    pub bar_found: Color,
    pub bar_text: Color,
    pub code_bg: Color,
    pub code_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Rgb(26, 26, 46), // #1a1a2e
    text: Color::Rgb(236, 240, 241), // #ecf0f1
    muted_text: Color::Rgb(127, 140, 141),
    header_text: Color::Rgb(229, 231, 235),
    border: Color::Rgb(52, 73, 94), // #34495e
    border_focused: Color::Rgb(245, 158, 11),
    bar_default: Color::Rgb(52, 152, 219), // #3498db
    bar_current: Color::Rgb(243, 156, 18), // #f39c12
    bar_visited: Color::Rgb(149, 165, 166), // #95a5a6
    bar_found: Color::Rgb(46, 204, 113), // #2ecc71
    bar_text: Color::Rgb(236, 240, 241),
    code_bg: Color::Rgb(13, 17, 23), // #0d1117
    code_fg: Color::Rgb(201, 209, 217), // #c9d1d9
    success: Color::Rgb(16, 185, 129),
    warning: Color::Rgb(245, 158, 11),
    danger: Color::Rgb(239, 68, 68),
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(246, 247, 251), // #f6f7fb
    text: Color::Rgb(17, 24, 39), // #111827
    muted_text: Color::Rgb(107, 114, 128),
    header_text: Color::Rgb(31, 41, 55),
    border: Color::Rgb(209, 213, 219), // #d1d5db
    border_focused: Color::Rgb(217, 119, 6),
    bar_default: Color::Rgb(43, 108, 176), // #2b6cb0
    bar_current: Color::Rgb(217, 119, 6), // #d97706
    bar_visited: Color::Rgb(156, 163, 175), // #9ca3af
    bar_found: Color::Rgb(5, 150, 105), // #059669
    bar_text: Color::Rgb(255, 255, 255),
    code_bg: Color::Rgb(243, 244, 246), // #f3f4f6
    code_fg: Color::Rgb(17, 24, 39),
    success: Color::Rgb(16, 185, 129),
    warning: Color::Rgb(245, 158, 11),
    danger: Color::Rgb(239, 68, 68),
};

pub fn palette(kind: ThemeKind) -> &'static Palette {
    match kind {
        ThemeKind::Dark => &DARK,
        ThemeKind::Light => &LIGHT,
    }
}

impl Palette {
    pub fn bar_color(&self, state: BarState) -> Color {
        match state {
            BarState::Default => self.bar_default,
            BarState::Current => self.bar_current,
            BarState::Visited => self.bar_visited,
            BarState::Found => self.bar_found,
        }
    }
}
