//! 业务逻辑处理 (Update/Dispatch)

use log::{error, info};

use super::actions::Action;
use super::state::{App, AppMode, PromptButton, ScreenState};
use crate::storage::WordStore;

impl<S: WordStore> App<S> {
    /// 激活屏幕：从存储加载全部单词
    pub fn activate(&mut self) {
        match self.store.fetch_all() {
            Ok(words) => {
                info!(
                    "event=load module=ui status=ok count={}",
                    words.len()
                );
                self.words = words;
            }
            Err(err) => {
                error!("event=load module=ui status=error error={err:?}");
            }
        }
        self.screen = ScreenState::Loaded;
        self.clamp_selection();
    }

    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::StartAddWord => self.start_add_word(),

            Action::Cancel => self.cancel(),

            Action::Submit => match self.mode {
                AppMode::AddingWord(PromptButton::Save) => self.confirm_add_word(),
                AppMode::AddingWord(PromptButton::Cancel) => self.cancel(),
                AppMode::Normal => {}
            },

            Action::SwitchButton => {
                if let AppMode::AddingWord(button) = self.mode {
                    self.mode = AppMode::AddingWord(button.toggled());
                }
            }

            Action::Input(c) => {
                if matches!(self.mode, AppMode::AddingWord(_)) {
                    self.input_buffer.push(c);
                }
            }

            Action::DeleteChar => {
                if matches!(self.mode, AppMode::AddingWord(_)) {
                    self.input_buffer.pop();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.words.len() {
            self.selected_index += 1;
        }
    }

    // ============ 添加单词相关 ============

    /// 打开添加弹窗，输入框为空
    pub fn start_add_word(&mut self) {
        self.mode = AppMode::AddingWord(PromptButton::default());
        self.input_buffer.clear();
        self.message = None;
    }

    /// 保存输入内容，不做裁剪和空值检查
    pub fn confirm_add_word(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        self.mode = AppMode::Normal;

        match self.store.save(&text) {
            Ok(word) => {
                info!("event=save module=ui status=ok id={}", word.id);
                self.words.push(word);
                self.selected_index = self.words.len() - 1;
                self.message = Some("Palabra guardada".to_string());
            }
            Err(err) => {
                // 失败只写日志，列表保持不变
                error!("event=save module=ui status=error error={err:?}");
            }
        }
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.message = None;
    }
}
