use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 存储格式版本
pub const FORMAT_VERSION: &str = "1.0";

/// 单词记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    #[serde(rename = "palabra", default)]
    pub text: String,
    pub created_at: DateTime<Local>,
}

impl Word {
    /// 新建单词，由存储层分配 id 和时间
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            created_at: Local::now(),
        }
    }
}

/// TOML文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordListData {
    pub meta: ListMeta,
    #[serde(rename = "lista", default)]
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMeta {
    pub version: String,
    pub created_at: DateTime<Local>,
    pub last_modified: DateTime<Local>,
}

impl Default for WordListData {
    fn default() -> Self {
        let now = Local::now();
        Self {
            meta: ListMeta {
                version: FORMAT_VERSION.to_string(),
                created_at: now,
                last_modified: now,
            },
            words: Vec::new(),
        }
    }
}

impl WordListData {
    /// 追加单词并更新修改时间
    pub fn push(&mut self, word: Word) {
        self.meta.last_modified = Local::now();
        self.words.push(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_word_keeps_text_verbatim() {
        let word = Word::new("  Lunes ");
        assert_eq!(word.text, "  Lunes ");
        assert!(!word.id.is_empty());

        let empty = Word::new("");
        assert_eq!(empty.text, "");
        assert_ne!(empty.id, word.id);
    }

    #[test]
    fn test_push_preserves_created_at() {
        let mut data = WordListData::default();
        let created = data.meta.created_at;
        data.push(Word::new("Lunes"));
        data.push(Word::new("Mazda"));

        assert_eq!(data.meta.created_at, created);
        assert!(data.meta.last_modified >= created);
        let texts: Vec<&str> = data.words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["Lunes", "Mazda"]);
    }

    #[test]
    fn test_toml_uses_lista_and_palabra_keys() {
        let mut data = WordListData::default();
        data.push(Word::new("Sega"));

        let content = toml::to_string_pretty(&data).unwrap();
        assert!(content.contains("[[lista]]"));
        assert!(content.contains("palabra = \"Sega\""));

        let parsed: WordListData = toml::from_str(&content).unwrap();
        assert_eq!(parsed.words, data.words);
    }
}
