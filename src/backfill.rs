//! 按历史记录补全缺失的街道后缀

use crate::components::{AddressComponents, StreetMatch};
use crate::reference::{unique_suffix, NameToSuffix};

/// 查找街道名唯一的历史后缀
///
/// 街道名不存在或对应多个后缀时返回空字符串。
///
/// ```rust
/// use streetaddr::{fill_suffix, MatchReference};
///
/// let reference = MatchReference::from_records([
///     ("Michigan", "Avenue"),
///     ("Main", "Street"),
///     ("Main", "Road"),
/// ]);
/// assert_eq!(fill_suffix("Michigan", &reference.name_to_suffix), "Avenue");
/// assert_eq!(fill_suffix("Main", &reference.name_to_suffix), "");
/// assert_eq!(fill_suffix("Elm", &reference.name_to_suffix), "");
/// ```
pub fn fill_suffix(street_name: &str, name_to_suffix: &NameToSuffix) -> String {
    unique_suffix(name_to_suffix, street_name)
        .unwrap_or_default()
        .to_string()
}

/// 为一条拆分结果给出最终后缀
///
/// - 已经解析出后缀时原样保留
/// - 否则用匹配结果中的街道名（为空时用解析出的街道名）查找唯一历史后缀
/// - 仍然没有时退回匹配结果中的后缀
pub fn backfill_suffix(
    components: &AddressComponents,
    suggestion: Option<&StreetMatch>,
    name_to_suffix: &NameToSuffix,
) -> String {
    if components.has_suffix() {
        return components.street_suffix.clone();
    }

    let name = suggestion
        .map(|m| m.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(components.street_name.as_str());

    let filled = fill_suffix(name, name_to_suffix);
    if !filled.is_empty() {
        return filled;
    }

    suggestion
        .map(|m| m.suffix.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::MatchReference;

    fn reference() -> MatchReference {
        MatchReference::from_records([
            ("Michigan", "Avenue"),
            ("Main", "Street"),
            ("Main", "Road"),
        ])
    }

    #[test]
    fn test_fill_suffix() {
        let reference = reference();
        assert_eq!(fill_suffix("Michigan", &reference.name_to_suffix), "Avenue");
        // 有歧义
        assert_eq!(fill_suffix("Main", &reference.name_to_suffix), "");
        // 不存在
        assert_eq!(fill_suffix("Elm", &reference.name_to_suffix), "");
        assert_eq!(fill_suffix("", &reference.name_to_suffix), "");
    }

    #[test]
    fn test_backfill_keeps_parsed_suffix() {
        let reference = reference();
        let components = AddressComponents::new("1", "Michigan", "", "Blvd", "");
        assert_eq!(
            backfill_suffix(&components, None, &reference.name_to_suffix),
            "Blvd"
        );
    }

    #[test]
    fn test_backfill_from_parsed_name() {
        let reference = reference();
        let components = AddressComponents::new("1", "Michigan", "", "", "");
        assert_eq!(
            backfill_suffix(&components, None, &reference.name_to_suffix),
            "Avenue"
        );
    }

    #[test]
    fn test_backfill_prefers_suggested_name() {
        let reference = reference();
        let components = AddressComponents::new("1", "Michgan", "", "", "");
        let suggestion = StreetMatch::new("Michigan", "", 93);
        assert_eq!(
            backfill_suffix(&components, Some(&suggestion), &reference.name_to_suffix),
            "Avenue"
        );
    }

    #[test]
    fn test_backfill_falls_back_to_suggested_suffix() {
        let reference = reference();
        let components = AddressComponents::new("1", "Main", "", "", "");

        let suggestion = StreetMatch::new("Main", " Street ", 100);
        assert_eq!(
            backfill_suffix(&components, Some(&suggestion), &reference.name_to_suffix),
            "Street"
        );

        assert_eq!(
            backfill_suffix(&components, None, &reference.name_to_suffix),
            ""
        );
    }

    #[test]
    fn test_backfill_empty_suggestion_name_uses_parsed_name() {
        let reference = reference();
        let components = AddressComponents::new("", "Michigan", "", "", "");
        let suggestion = StreetMatch::none();
        assert_eq!(
            backfill_suffix(&components, Some(&suggestion), &reference.name_to_suffix),
            "Avenue"
        );
    }
}
