//! 运行配置
//!
//! 数据目录与日志级别，可由环境变量覆盖：
//! - `GUARDAPALABRAS_DATA_DIR`: 数据目录 (默认 ~/.local/share/guardapalabras/)
//! - `GUARDAPALABRAS_LOG`: 日志级别 (默认 info)

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const DATA_DIR_ENV: &str = "GUARDAPALABRAS_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "GUARDAPALABRAS_LOG";

const APP_DIR_NAME: &str = "guardapalabras";
const DATA_FILE_NAME: &str = "palabras.toml";
const LOG_DIR_NAME: &str = "logs";
const DEFAULT_LOG_LEVEL: &str = "info";
const SUPPORTED_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to locate the user data directory")]
    NoDataDir,
    #[error("unsupported log level `{0}`")]
    InvalidLogLevel(String),
    #[error("failed to create data directory `{}`", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// 从环境变量读取配置
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env::var_os(DATA_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let log_level = env::var(LOG_LEVEL_ENV).ok();
        Self::resolve(data_dir, log_level, dirs::data_dir())
    }

    /// 合并覆盖值与平台默认目录
    pub fn resolve(
        data_dir: Option<PathBuf>,
        log_level: Option<String>,
        platform_data_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => platform_data_dir
                .ok_or(ConfigError::NoDataDir)?
                .join(APP_DIR_NAME),
        };

        let log_level = normalize_level(log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))?;

        Ok(Self {
            data_dir,
            log_level,
        })
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    /// 创建数据目录
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| ConfigError::CreateDir {
            path: self.data_dir.clone(),
            source,
        })
    }
}

fn normalize_level(level: &str) -> Result<String, ConfigError> {
    let normalized = level.trim().to_ascii_lowercase();
    if SUPPORTED_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ConfigError::InvalidLogLevel(level.to_string()))
    }
}
