use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::models::{Word, WordListData};

/// 存储层错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode `{}`", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to encode word list")]
    Encode(#[from] toml::ser::Error),
    #[error("failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 单词存储网关
pub trait WordStore {
    /// 按存储顺序返回全部单词
    fn fetch_all(&self) -> Result<Vec<Word>, StorageError>;

    /// 持久化一个新单词并返回它
    fn save(&mut self, text: &str) -> Result<Word, StorageError>;
}

/// 基于TOML文件的存储
#[derive(Debug, Clone)]
pub struct TomlWordStore {
    path: PathBuf,
}

impl TomlWordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 从TOML文件加载，文件不存在时视为空列表
    fn load(&self) -> Result<WordListData, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(WordListData::default());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| StorageError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("toml.tmp")
    }

    /// 先写临时文件再重命名，避免写到一半的文件
    fn store(&self, data: &WordListData) -> Result<(), StorageError> {
        let content = toml::to_string_pretty(data)?;
        let tmp_path = self.tmp_path();

        if let Err(source) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StorageError::Write {
                path: tmp_path,
                source,
            });
        }

        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StorageError::Write {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }
}

impl WordStore for TomlWordStore {
    fn fetch_all(&self) -> Result<Vec<Word>, StorageError> {
        let data = self.load()?;
        debug!(
            "event=fetch_all module=storage status=ok count={}",
            data.words.len()
        );
        Ok(data.words)
    }

    fn save(&mut self, text: &str) -> Result<Word, StorageError> {
        let mut data = self.load()?;
        let word = Word::new(text);
        data.push(word.clone());
        self.store(&data)?;
        debug!(
            "event=save module=storage status=ok id={} count={}",
            word.id,
            data.words.len()
        );
        Ok(word)
    }
}

/// 内存存储，不落盘
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryWordStore {
    words: Vec<Word>,
}

#[cfg(test)]
impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl WordStore for MemoryWordStore {
    fn fetch_all(&self) -> Result<Vec<Word>, StorageError> {
        Ok(self.words.clone())
    }

    fn save(&mut self, text: &str) -> Result<Word, StorageError> {
        let word = Word::new(text);
        self.words.push(word.clone());
        Ok(word)
    }
}
