//! 错误类型
//!
//! - [`InputError`]: 用户输入错误，以弹窗形式展示，不会启动搜索
//! - [`AppError`]: 终端、文件与配置相关的基础设施错误

use std::io;

use thiserror::Error;

/// 搜索目标输入错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// 输入为空
    #[error("Please enter a target number")]
    Empty,

    /// 输入不是整数
    #[error("Please enter a valid number")]
    NotANumber(String),
}

impl InputError {
    /// 弹窗标题
    pub fn title(&self) -> &'static str {
        match self {
            InputError::Empty => "Input Required",
            InputError::NotANumber(_) => "Invalid Input",
        }
    }
}

/// 应用级错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    #[error("cannot locate the user data directory")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_titles_and_messages() {
        assert_eq!(InputError::Empty.title(), "Input Required");
        assert_eq!(InputError::Empty.to_string(), "Please enter a target number");

        let err = InputError::NotANumber("abc".to_string());
        assert_eq!(err.title(), "Invalid Input");
        assert_eq!(err.to_string(), "Please enter a valid number");
    }
}
