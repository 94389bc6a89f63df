//! 键盘事件映射 (Input -> Action)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode};
use crate::storage::WordStore;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyEvent) -> Option<Action> {
    // Ctrl 组合键不作为文本输入，Ctrl+C 等同退出/取消
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match (mode, key.code) {
            (AppMode::Normal, KeyCode::Char('c')) => Some(Action::Quit),
            (AppMode::AddingWord(_), KeyCode::Char('c')) => Some(Action::Cancel),
            _ => None,
        };
    }

    match mode {
        AppMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') => Some(Action::StartAddWord),
            _ => None,
        },
        AppMode::AddingWord(_) => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => Some(Action::SwitchButton),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event<S: WordStore>(app: &mut App<S>, key: KeyEvent) -> bool {
    match get_action(&app.mode, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
