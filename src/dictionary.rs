//! 街道后缀词表与 Mile Road 词表的加载

use crate::error::LoadError;
use crate::text::{is_numeric, to_title_case};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// 内嵌的参考词表（编译时包含）
const REFERENCE_DATA: &str = include_str!("../data/reference.toml");

/// 全局内置词表
static BUILTIN_TABLES: Lazy<ReferenceTables> = Lazy::new(|| {
    ReferenceTables::from_toml_str(REFERENCE_DATA).expect("embedded reference.toml is valid")
});

/// TOML 文件结构
#[derive(Debug, Deserialize)]
struct TablesFile {
    suffixes: Vec<String>,
    #[serde(default)]
    mile_roads: HashMap<String, String>,
}

/// 街道后缀词表
///
/// 只用于判断某个词元（转为标题大小写后）是否是已知的街道后缀。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationDictionary {
    words: HashSet<String>,
}

impl AbbreviationDictionary {
    /// 从词列表构建，词会统一转为标题大小写
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| to_title_case(w.as_ref().trim()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// 是否是已知后缀（调用方需传入标题大小写形式）
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// 词条数量
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 是否没有词条
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// 数字到英文单词的映射（"12" -> "Twelve"），用于 "12 Mile Road"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MileRoadDictionary {
    words: HashMap<String, String>,
}

impl MileRoadDictionary {
    /// 从 (数字, 单词) 对构建
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            words: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 查找数字对应的单词
    pub fn word_for(&self, numeral: &str) -> Option<&str> {
        self.words.get(numeral.trim()).map(String::as_str)
    }

    /// 词条数量
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 是否没有词条
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// 拆分器使用的两张只读参考表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTables {
    /// 街道后缀词表
    pub abbreviations: AbbreviationDictionary,
    /// Mile Road 词表
    pub mile_roads: MileRoadDictionary,
}

impl ReferenceTables {
    /// 用已构建的两张表创建
    pub fn new(abbreviations: AbbreviationDictionary, mile_roads: MileRoadDictionary) -> Self {
        Self {
            abbreviations,
            mile_roads,
        }
    }

    /// 获取内置词表
    pub fn builtin() -> &'static ReferenceTables {
        &BUILTIN_TABLES
    }

    /// 从 TOML 文本加载
    ///
    /// ```rust
    /// use streetaddr::ReferenceTables;
    ///
    /// let tables = ReferenceTables::from_toml_str(r#"
    ///     suffixes = ["ROAD", "rd"]
    ///     [mile_roads]
    ///     "8" = "Eight"
    /// "#).unwrap();
    /// assert!(tables.abbreviations.contains("Road"));
    /// assert!(tables.abbreviations.contains("Rd"));
    /// assert_eq!(tables.mile_roads.word_for("8"), Some("Eight"));
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let file: TablesFile = toml::from_str(content)?;

        let abbreviations = AbbreviationDictionary::new(&file.suffixes);
        if abbreviations.is_empty() {
            return Err(LoadError::InvalidTable(
                "suffixes must contain at least one word".to_string(),
            ));
        }

        for (numeral, word) in &file.mile_roads {
            if !is_numeric(numeral) {
                return Err(LoadError::InvalidTable(format!(
                    "mile road key is not a number: {numeral:?}"
                )));
            }
            if word.trim().is_empty() {
                return Err(LoadError::InvalidTable(format!(
                    "mile road {numeral} has an empty word"
                )));
            }
        }

        let mile_roads = MileRoadDictionary::new(
            file.mile_roads
                .into_iter()
                .map(|(k, v)| (k, v.trim().to_string())),
        );

        log::debug!(
            "Loaded reference tables: {} suffixes, {} mile roads",
            abbreviations.len(),
            mile_roads.len()
        );

        Ok(Self::new(abbreviations, mile_roads))
    }

    /// 从 TOML 文件加载
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables() {
        let tables = ReferenceTables::builtin();

        assert!(tables.abbreviations.contains("Avenue"));
        assert!(tables.abbreviations.contains("Dr"));
        assert!(tables.abbreviations.contains("Trail"));
        assert!(tables.abbreviations.contains("Road"));
        assert!(!tables.abbreviations.contains("Michigan"));
        assert!(!tables.abbreviations.contains("Unit"));
        // 只接受标题大小写
        assert!(!tables.abbreviations.contains("AVENUE"));

        assert_eq!(tables.mile_roads.len(), 20);
        assert_eq!(tables.mile_roads.word_for("1"), Some("One"));
        assert_eq!(tables.mile_roads.word_for("20"), Some("Twenty"));
        assert_eq!(tables.mile_roads.word_for("21"), None);
    }

    #[test]
    fn test_abbreviation_dictionary_title_cases_words() {
        let dict = AbbreviationDictionary::new(["STREET", " blvd ", ""]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("Street"));
        assert!(dict.contains("Blvd"));
    }

    #[test]
    fn test_empty_suffixes_rejected() {
        let err = ReferenceTables::from_toml_str("suffixes = []").unwrap_err();
        assert!(matches!(err, LoadError::InvalidTable(_)));
    }

    #[test]
    fn test_non_numeric_mile_road_rejected() {
        let err = ReferenceTables::from_toml_str(
            r#"
            suffixes = ["Road"]
            [mile_roads]
            "ten" = "Ten"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidTable(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = ReferenceTables::from_toml_str("suffixes = [").unwrap_err();
        assert!(matches!(err, LoadError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ReferenceTables::from_path("/nonexistent/streetaddr/reference.toml").unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with("reference.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
