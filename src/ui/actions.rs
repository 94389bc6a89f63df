//! Action 枚举定义 (Intent)

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    StartAddWord,

    // 弹窗交互
    Cancel,       // Esc
    Submit,       // Enter，触发当前聚焦的按钮
    SwitchButton, // Tab / ← / →
    Input(char),
    DeleteChar, // Backspace
}
