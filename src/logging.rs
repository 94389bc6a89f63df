//! 文件日志
//!
//! 终端被 TUI 占用，日志只写入文件，按大小滚动。panic 也会记录到日志。

use std::panic::PanicHookInfo;
use std::path::Path;

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info};

const LOG_FILE_BASENAME: &str = "guardapalabras";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

/// 启动文件日志，返回的 handle 需保持到进程结束
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    install_panic_hook();

    info!(
        "event=app_start module=core status=ok platform={} version={} level={} log_dir={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );

    Ok(handle)
}

fn install_panic_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic module=core status=error location={} payload={}",
            location,
            panic_payload_summary(panic_info)
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload_summary(info: &PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

/// 去掉换行并截断，保证一条日志一行
fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut truncated: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_single_line_flattens_and_truncates() {
        assert_eq!(single_line("Lunes\nMazda", 40), "Lunes Mazda");

        let truncated = single_line("palabra\rlarga", 7);
        assert_eq!(truncated, "palabra...");
    }

    // 全局 logger 每个进程只能启动一次，只在这里启动
    #[test]
    fn test_init_logging_writes_into_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let handle = init_logging("info", &log_dir).unwrap();
        info!("event=test module=logging status=ok");
        handle.flush();

        let log_files: Vec<_> = fs::read_dir(&log_dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| {
                        name.starts_with(LOG_FILE_BASENAME) && name.ends_with(".log")
                    })
            })
            .collect();
        assert_eq!(log_files.len(), 1);

        let content = fs::read_to_string(&log_files[0]).unwrap();
        assert!(content.contains("event=app_start"));
        assert!(content.contains("event=test"));
    }
}
