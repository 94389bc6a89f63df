//! 终端会话
//!
//! raw mode 一旦开启，任何退出路径（`?` 提前返回、panic、正常结束）都要恢复终端。

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

type RestoreFn = fn() -> io::Result<()>;

/// 离开作用域时执行一次恢复动作
pub struct RestoreGuard<F: FnMut() -> io::Result<()>> {
    restore: Option<F>,
}

impl<F: FnMut() -> io::Result<()>> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// 立即恢复并返回结果，之后 drop 不再重复执行
    pub fn finish(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(mut restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            if let Err(err) = restore() {
                warn!("event=terminal_restore module=terminal status=error error={err}");
            }
        }
    }
}

/// 备用屏幕 + raw mode 下的 ratatui 终端
pub struct TerminalSession {
    terminal: Tui,
    guard: RestoreGuard<RestoreFn>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = RestoreGuard::new(restore_terminal as RestoreFn);

        execute!(io::stdout(), EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// 恢复终端，返回恢复过程中的第一个错误
    pub fn exit(self) -> io::Result<()> {
        let Self { guard, .. } = self;
        guard.finish()
    }
}

/// 每一步都执行，不因前一步失败而跳过
pub fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// panic 时先恢复终端，再交给之前的 hook 输出
pub fn install_panic_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        previous_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_restore(count: Arc<AtomicUsize>) -> impl FnMut() -> io::Result<()> {
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn enter_alternate_screen() -> io::Result<()> {
        Err(io::Error::other("alternate screen unavailable"))
    }

    fn setup_that_fails(count: &Arc<AtomicUsize>) -> io::Result<()> {
        let _guard = RestoreGuard::new(counting_restore(Arc::clone(count)));
        enter_alternate_screen()?;
        Ok(())
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        let count = Arc::new(AtomicUsize::new(0));
        assert!(setup_that_fails(&count).is_err());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    fn render_that_panics() {
        panic!("render failed");
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let count = Arc::new(AtomicUsize::new(0));
        let restore = counting_restore(Arc::clone(&count));

        let result = std::panic::catch_unwind(move || {
            let _guard = RestoreGuard::new(restore);
            render_that_panics();
        });

        assert!(result.is_err());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_finish_restores_once_and_reports_error() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let guard = RestoreGuard::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::other("not a tty"))
        });

        assert!(guard.finish().is_err());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
