mod config;
mod logging;
mod models;
mod storage;
mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::logging::init_logging;
use crate::storage::{TomlWordStore, WordStore};
use crate::terminal::{TerminalSession, Tui};
use crate::ui::{App, render};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to start logger: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    config.ensure_dirs()?;
    let _logger = init_logging(&config.log_level, &config.log_dir())?;

    // 数据文件路径 (~/.local/share/guardapalabras/palabras.toml)
    let store = TomlWordStore::new(config.data_file());
    info!(
        "event=store_open module=core status=ok path={}",
        store.path().display()
    );

    let mut app = App::new(store);
    app.activate();

    // 设置终端，panic 时也要恢复
    terminal::install_panic_hook();
    let mut session = TerminalSession::enter()?;

    // 主循环
    let result = run_app(session.terminal_mut(), &mut app);

    // 恢复终端
    let restored = session.exit();

    info!(
        "event=app_exit module=core status={} count={}",
        if result.is_ok() { "ok" } else { "error" },
        app.row_count()
    );

    result.and(restored).map_err(AppError::from)
}

/// 每次事件后重绘，保存成功后列表即时刷新
fn run_app<S: WordStore>(terminal: &mut Tui, app: &mut App<S>) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}
