//! App 状态定义 (Model)

use crate::models::Word;
use crate::storage::WordStore;

/// 应用状态
pub struct App<S: WordStore> {
    pub store: S,
    pub screen: ScreenState,
    pub words: Vec<Word>,
    pub selected_index: usize,
    pub mode: AppMode,
    pub input_buffer: String,
    pub message: Option<String>,
}

/// 屏幕生命周期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    Loaded,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    AddingWord(PromptButton),
}

/// 添加弹窗中聚焦的按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptButton {
    #[default]
    Save,
    Cancel,
}

impl PromptButton {
    pub fn toggled(self) -> Self {
        match self {
            PromptButton::Save => PromptButton::Cancel,
            PromptButton::Cancel => PromptButton::Save,
        }
    }
}

impl<S: WordStore> App<S> {
    /// 创建新的应用实例，尚未加载数据
    pub fn new(store: S) -> Self {
        Self {
            store,
            screen: ScreenState::Idle,
            words: Vec::new(),
            selected_index: 0,
            mode: AppMode::Normal,
            input_buffer: String::new(),
            message: None,
        }
    }

    /// 行数
    pub fn row_count(&self) -> usize {
        self.words.len()
    }

    /// 指定行显示的文本
    pub fn row_text(&self, row: usize) -> Option<&str> {
        self.words.get(row).map(|word| word.text.as_str())
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.words.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.words.len() {
            self.selected_index = self.words.len() - 1;
        }
    }
}
