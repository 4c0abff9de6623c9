//! 地址组成部分与匹配结果的数据结构

use serde::{Deserialize, Serialize};

/// 街道地址拆分结果
///
/// 所有字段都已去除首尾空白，缺失时为空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressComponents {
    /// 门牌号（纯数字或空）
    pub street_number: String,
    /// 街道名
    pub street_name: String,
    /// 方位前缀（E/W/N/S 或空）
    pub street_prefix: String,
    /// 街道后缀（标题大小写或空）
    pub street_suffix: String,
    /// 其余词元（单元号等）
    pub other: String,
}

impl AddressComponents {
    /// 创建新的拆分结果，各字段会去除首尾空白
    pub fn new(
        street_number: impl AsRef<str>,
        street_name: impl AsRef<str>,
        street_prefix: impl AsRef<str>,
        street_suffix: impl AsRef<str>,
        other: impl AsRef<str>,
    ) -> Self {
        Self {
            street_number: street_number.as_ref().trim().to_string(),
            street_name: street_name.as_ref().trim().to_string(),
            street_prefix: street_prefix.as_ref().trim().to_string(),
            street_suffix: street_suffix.as_ref().trim().to_string(),
            other: other.as_ref().trim().to_string(),
        }
    }

    /// 创建空的拆分结果
    pub fn empty() -> Self {
        Self::default()
    }

    /// 是否所有字段都为空
    pub fn is_empty(&self) -> bool {
        self.street_number.is_empty()
            && self.street_name.is_empty()
            && self.street_prefix.is_empty()
            && self.street_suffix.is_empty()
            && self.other.is_empty()
    }

    /// 是否解析出门牌号
    pub fn has_number(&self) -> bool {
        !self.street_number.is_empty()
    }

    /// 是否解析出方位前缀
    pub fn has_prefix(&self) -> bool {
        !self.street_prefix.is_empty()
    }

    /// 是否解析出后缀
    pub fn has_suffix(&self) -> bool {
        !self.street_suffix.is_empty()
    }

    /// 重新拼接街道地址（不含 `other`）
    ///
    /// 顺序为 门牌号、前缀、街道名、后缀，空字段跳过。
    pub fn street_address(&self) -> String {
        [
            &self.street_number,
            &self.street_prefix,
            &self.street_name,
            &self.street_suffix,
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// 转为 (门牌号, 街道名, 前缀, 后缀, 其他) 元组
    pub fn into_tuple(self) -> (String, String, String, String, String) {
        (
            self.street_number,
            self.street_name,
            self.street_prefix,
            self.street_suffix,
            self.other,
        )
    }
}

impl From<AddressComponents> for (String, String, String, String, String) {
    fn from(components: AddressComponents) -> Self {
        components.into_tuple()
    }
}

/// 标准街道匹配结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreetMatch {
    /// 匹配到的标准街道名
    pub name: String,
    /// 匹配到的标准后缀（有歧义时为空）
    pub suffix: String,
    /// 置信度，0..=100
    pub score: u8,
}

impl StreetMatch {
    /// 精确匹配的满分分数
    pub const EXACT_SCORE: u8 = 100;

    /// 创建匹配结果
    pub fn new(name: impl Into<String>, suffix: impl Into<String>, score: u8) -> Self {
        Self {
            name: name.into(),
            suffix: suffix.into(),
            score,
        }
    }

    /// 精确匹配（满分）
    pub fn exact(name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::new(name, suffix, Self::EXACT_SCORE)
    }

    /// 未找到任何匹配
    pub fn none() -> Self {
        Self::default()
    }

    /// 是否为满分匹配
    pub fn is_exact(&self) -> bool {
        self.score == Self::EXACT_SCORE
    }

    /// 是否找到了候选
    pub fn is_found(&self) -> bool {
        self.score > 0
    }

    /// 转为 (街道名, 后缀, 分数) 元组
    pub fn into_tuple(self) -> (String, String, u8) {
        (self.name, self.suffix, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_new_trims() {
        let c = AddressComponents::new(" 1000 ", "Michigan ", "", " Avenue", "  ");
        assert_eq!(c.street_number, "1000");
        assert_eq!(c.street_name, "Michigan");
        assert_eq!(c.street_suffix, "Avenue");
        assert_eq!(c.other, "");
        assert!(c.has_number());
        assert!(!c.has_prefix());
        assert!(c.has_suffix());
    }

    #[test]
    fn test_street_address() {
        let c = AddressComponents::new("32", "Stone", "E", "Trail", "9");
        assert_eq!(c.street_address(), "32 E Stone Trail");

        let c = AddressComponents::new("", "Best of America", "", "Dr", "1000 cat 506");
        assert_eq!(c.street_address(), "Best of America Dr");

        assert_eq!(AddressComponents::empty().street_address(), "");
    }

    #[test]
    fn test_into_tuple() {
        let c = AddressComponents::new("56", "Test", "", "Dr", "unit 571");
        let t: (String, String, String, String, String) = c.into();
        assert_eq!(
            t,
            (
                "56".to_string(),
                "Test".to_string(),
                String::new(),
                "Dr".to_string(),
                "unit 571".to_string()
            )
        );
    }

    #[test]
    fn test_street_match() {
        let m = StreetMatch::exact("Michigan", "Avenue");
        assert!(m.is_exact());
        assert!(m.is_found());
        assert_eq!(m.into_tuple(), ("Michigan".to_string(), "Avenue".to_string(), 100));

        let none = StreetMatch::none();
        assert!(!none.is_found());
        assert_eq!(none.into_tuple(), (String::new(), String::new(), 0));
    }
}
