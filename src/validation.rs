//! 搜索目标输入校验

use crate::error::InputError;

/// 解析搜索目标：去除首尾空白后必须是整数
pub fn parse_target(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}
