//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    NextAlgorithm,
    PrevAlgorithm,
    SpeedUp,
    SpeedDown,
    ToggleTheme,

    // 运行控制
    StartRun,
    Reset,

    // 目标输入
    StartEditTarget,
    Input(char), // 输入字符
    DeleteChar,  // Backspace

    // 表单/弹窗
    Cancel,  // Esc
    Submit,  // Enter
    Dismiss, // 关闭弹窗
}
