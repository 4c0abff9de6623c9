//! # streetaddr - US Street Address Splitter
//!
//! 美国街道地址拆分与标准街道匹配库。
//!
//! ## 功能特性
//!
//! - 把自由文本地址拆成门牌号、街道名、方位前缀、后缀和其余部分
//! - 多个后缀词时以最右侧的为准（"Michigan Avenue Road" -> 名称 "Michigan Avenue"，后缀 "Road"）
//! - 支持 "12 Mile Road" 这类以数字命名的道路
//! - 将解析结果与标准街道列表做精确或模糊匹配
//! - 根据历史记录补全缺失的后缀（有歧义时不猜）
//!
//! ## 快速开始
//!
//! ```rust
//! use streetaddr::{MatchReference, NameResolver, StreetSplitter};
//!
//! let splitter = StreetSplitter::default();
//!
//! // 拆分地址
//! let result = splitter.parse("32 East-Stone Trail.#9");
//! assert_eq!(result.street_number, "32");
//! assert_eq!(result.street_prefix, "E");
//! assert_eq!(result.street_name, "Stone");
//! assert_eq!(result.street_suffix, "Trail");
//! assert_eq!(result.other, "9");
//!
//! // 匹配标准街道
//! let reference = MatchReference::from_records([("Stone", "Trail"), ("Stone", "Court")]);
//! let resolver = NameResolver::new(&reference);
//! let matched = resolver.close_match(&result.street_name, &result.street_suffix);
//! assert_eq!(matched.suffix, "Trail");
//! assert_eq!(matched.score, 100);
//! ```

mod backfill;
mod components;
mod dictionary;
mod error;
mod parser;
mod reference;
mod resolver;
pub mod text;

pub use backfill::{backfill_suffix, fill_suffix};
pub use components::{AddressComponents, StreetMatch};
pub use dictionary::{AbbreviationDictionary, MileRoadDictionary, ReferenceTables};
pub use error::LoadError;
pub use parser::StreetSplitter;
pub use reference::{
    MatchReference, NameToSuffix, ReferenceColumns, StandardAddressSet, StandardNameSet,
};
pub use resolver::{NameResolver, ResolverConfig};

/// 便捷函数：使用内置词表拆分地址
///
/// ```rust
/// let result = streetaddr::parse_street("1000 Michigan Avenue Road");
/// assert_eq!(result.street_name, "Michigan Avenue");
/// assert_eq!(result.street_suffix, "Road");
/// ```
pub fn parse_street(address: &str) -> AddressComponents {
    StreetSplitter::global().parse(address)
}

/// 便捷函数：使用默认配置匹配标准街道
///
/// ```rust
/// use streetaddr::MatchReference;
///
/// let reference = MatchReference::from_records([("Michigan", "Avenue")]);
/// let matched = streetaddr::close_match("michigan", "AVENUE", &reference);
/// assert_eq!(matched.into_tuple(), ("Michigan".to_string(), "Avenue".to_string(), 100));
/// ```
pub fn close_match(name: &str, suffix: &str, reference: &MatchReference) -> StreetMatch {
    NameResolver::new(reference).close_match(name, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_street() {
        let result = parse_street("1000 Michigan Avenue");

        assert_eq!(result.street_number, "1000");
        assert_eq!(result.street_name, "Michigan");
        assert_eq!(result.street_prefix, "");
        assert_eq!(result.street_suffix, "Avenue");
        assert_eq!(result.other, "");
    }

    #[test]
    fn test_parse_street_no_number() {
        let result = parse_street("Best of America 1000 Dr cat 506");

        assert_eq!(result.street_number, "");
        assert_eq!(result.street_name, "Best of America");
        assert_eq!(result.street_suffix, "Dr");
        assert_eq!(result.other, "1000 cat 506");
    }

    #[test]
    fn test_parse_then_match() {
        let reference = MatchReference::from_records([
            ("Test", "Drive"),
            ("Michigan", "Avenue"),
            ("Stone", "Trail"),
        ]);

        let parsed = parse_street("56 Test Dr. unit 571");
        let matched = close_match(&parsed.street_name, &parsed.street_suffix, &reference);
        // "test dr" 与 "test drive" 差 3 个字符，低于阈值后按名称命中
        assert_eq!(matched.name, "Test");
        assert_eq!(matched.suffix, "Drive");
        assert_eq!(matched.score, 100);
    }

    #[test]
    fn test_parse_match_and_backfill() {
        let reference = MatchReference::from_records([("Michigan", "Avenue")]);

        let parsed = parse_street("1000 Michigan");
        assert_eq!(parsed.street_suffix, "");

        let matched = close_match(&parsed.street_name, &parsed.street_suffix, &reference);
        let suffix = backfill_suffix(&parsed, Some(&matched), &reference.name_to_suffix);
        assert_eq!(suffix, "Avenue");
    }
}
