//! 标准街道数据及其索引构建

use crate::error::LoadError;
use crate::text::to_title_case;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

/// 标准 (街道名, 后缀) 集合
pub type StandardAddressSet = BTreeSet<(String, String)>;
/// 标准街道名集合
pub type StandardNameSet = BTreeSet<String>;
/// 街道名 -> 历史上出现过的后缀集合
pub type NameToSuffix = BTreeMap<String, BTreeSet<String>>;

/// 标准 CSV 中使用的列名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceColumns {
    /// 街道名列
    pub name: String,
    /// 后缀列
    pub suffix: String,
}

impl Default for ReferenceColumns {
    fn default() -> Self {
        Self {
            name: "Street Name".to_string(),
            suffix: "Street Suffix".to_string(),
        }
    }
}

/// 模糊匹配用的三份只读参考数据
///
/// 使用有序集合，模糊匹配同分时结果是确定的（字典序最前者胜出）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReference {
    /// 标准 (街道名, 后缀) 集合
    pub standard_addresses: StandardAddressSet,
    /// 标准街道名集合
    pub standard_names: StandardNameSet,
    /// 街道名 -> 后缀集合
    pub name_to_suffix: NameToSuffix,
}

impl MatchReference {
    /// 用现成的三份数据创建，不做任何规范化
    pub fn new(
        standard_addresses: StandardAddressSet,
        standard_names: StandardNameSet,
        name_to_suffix: NameToSuffix,
    ) -> Self {
        Self {
            standard_addresses,
            standard_names,
            name_to_suffix,
        }
    }

    /// 从 (街道名, 后缀) 记录构建
    ///
    /// 两个字段都会去除空白并转为标题大小写，街道名为空的记录被跳过。
    ///
    /// ```rust
    /// use streetaddr::MatchReference;
    ///
    /// let reference = MatchReference::from_records([
    ///     ("MICHIGAN", "AVENUE"),
    ///     ("Michigan", "Avenue"),
    ///     ("Main", "St"),
    ///     ("Main", "Road"),
    /// ]);
    /// assert_eq!(reference.len(), 3);
    /// assert_eq!(reference.unique_suffix("Michigan"), Some("Avenue"));
    /// assert_eq!(reference.unique_suffix("Main"), None);
    /// ```
    pub fn from_records<I, N, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let mut reference = Self::default();
        for (name, suffix) in records {
            reference.insert(name.as_ref(), suffix.as_ref());
        }
        reference
    }

    /// 从带表头的 CSV 构建
    ///
    /// 格式错误的行会被跳过。
    pub fn from_csv_reader(
        reader: impl Read,
        columns: &ReferenceColumns,
    ) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| LoadError::MissingColumn(column.to_string()))
        };
        let name_idx = position(columns.name.as_str())?;
        let suffix_idx = position(columns.suffix.as_str())?;

        let mut reference = Self::default();
        let mut skipped = 0usize;
        for result in csv_reader.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    log::trace!("  skipping malformed row: {e}");
                    skipped += 1;
                    continue;
                }
            };

            let name = record.get(name_idx).unwrap_or_default();
            let suffix = record.get(suffix_idx).unwrap_or_default();
            reference.insert(name, suffix);
        }

        log::debug!(
            "Loaded {} standard addresses ({} names, {} malformed rows skipped)",
            reference.len(),
            reference.standard_names.len(),
            skipped
        );

        Ok(reference)
    }

    /// 从 CSV 文件构建
    pub fn from_csv_path(
        path: impl AsRef<Path>,
        columns: &ReferenceColumns,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_csv_reader(file, columns)
    }

    /// 加入一条标准记录
    fn insert(&mut self, name: &str, suffix: &str) {
        let name = to_title_case(name.trim());
        if name.is_empty() {
            return;
        }
        let suffix = to_title_case(suffix.trim());

        self.standard_names.insert(name.clone());
        self.name_to_suffix
            .entry(name.clone())
            .or_default()
            .insert(suffix.clone());
        self.standard_addresses.insert((name, suffix));
    }

    /// 标准地址数量
    pub fn len(&self) -> usize {
        self.standard_addresses.len()
    }

    /// 是否没有任何标准地址
    pub fn is_empty(&self) -> bool {
        self.standard_addresses.is_empty()
    }

    /// (街道名, 后缀) 是否是标准地址
    pub fn contains_address(&self, name: &str, suffix: &str) -> bool {
        self.standard_addresses
            .contains(&(name.to_string(), suffix.to_string()))
    }

    /// 是否是标准街道名
    pub fn contains_name(&self, name: &str) -> bool {
        self.standard_names.contains(name)
    }

    /// 街道名唯一对应的后缀，不存在或有歧义时返回 `None`
    pub fn unique_suffix(&self, name: &str) -> Option<&str> {
        unique_suffix(&self.name_to_suffix, name)
    }
}

/// 在 `name_to_suffix` 中查找唯一后缀
pub(crate) fn unique_suffix<'m>(name_to_suffix: &'m NameToSuffix, name: &str) -> Option<&'m str> {
    let suffixes = name_to_suffix.get(name)?;
    if suffixes.len() == 1 {
        suffixes.iter().next().map(String::as_str)
    } else {
        None
    }
}
