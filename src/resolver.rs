//! 标准街道名匹配
//!
//! 先做几轮精确查找，都失败后再对全部标准地址做线性模糊扫描。

use crate::components::StreetMatch;
use crate::error::LoadError;
use crate::reference::MatchReference;
use crate::text::{similarity, to_title_case};
use serde::Deserialize;
use std::collections::HashMap;

/// 匹配器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// 全称模糊匹配分数低于该值时，再单独按街道名匹配一轮
    pub name_only_threshold: u8,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            name_only_threshold: 90,
        }
    }
}

impl ResolverConfig {
    /// 从 TOML 文本加载，缺失的字段取默认值
    ///
    /// ```rust
    /// use streetaddr::ResolverConfig;
    ///
    /// let config = ResolverConfig::from_toml_str("name_only_threshold = 80").unwrap();
    /// assert_eq!(config.name_only_threshold, 80);
    /// assert_eq!(ResolverConfig::from_toml_str("").unwrap(), ResolverConfig::default());
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }
}

/// 标准街道匹配器
///
/// 只读借用参考数据，对同一份数据相同输入总是得到相同结果。
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    reference: &'a MatchReference,
    config: ResolverConfig,
}

impl<'a> NameResolver<'a> {
    /// 使用默认配置创建
    pub fn new(reference: &'a MatchReference) -> Self {
        Self::with_config(reference, ResolverConfig::default())
    }

    /// 使用指定配置创建
    pub fn with_config(reference: &'a MatchReference, config: ResolverConfig) -> Self {
        Self { reference, config }
    }

    /// 匹配用的参考数据
    pub fn reference(&self) -> &'a MatchReference {
        self.reference
    }

    /// 当前配置
    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    /// 查找与 (街道名, 后缀) 最接近的标准地址
    ///
    /// 依次尝试：
    /// 1. (街道名, 后缀) 精确命中标准地址
    /// 2. 街道名本身就是 "名称 后缀"，拆开后精确命中
    /// 3. "街道名 后缀" 精确命中标准街道名，后缀取唯一历史后缀
    /// 4. 与所有标准地址做模糊比较，取分数最高者
    /// 5. 第 4 步分数不够高时，只用街道名与标准街道名比较
    ///
    /// # 示例
    /// ```rust
    /// use streetaddr::{MatchReference, NameResolver};
    ///
    /// let reference = MatchReference::from_records([("Michigan", "Ave"), ("Main", "St")]);
    /// let resolver = NameResolver::new(&reference);
    ///
    /// let m = resolver.close_match("MICHIGAN", "ave");
    /// assert_eq!((m.name.as_str(), m.suffix.as_str(), m.score), ("Michigan", "Ave", 100));
    ///
    /// let m = resolver.close_match("Michgan", "Ave");
    /// assert_eq!(m.name, "Michigan");
    /// assert!(m.score < 100);
    /// ```
    pub fn close_match(&self, name: &str, suffix: &str) -> StreetMatch {
        let name = to_title_case(name.trim());
        let suffix = to_title_case(suffix.trim());
        let reference = self.reference;

        if reference.contains_address(&name, &suffix) {
            log::trace!("exact address match: {name:?} {suffix:?}");
            return StreetMatch::exact(name, suffix);
        }

        // 街道名里已经带了后缀，如 ("Michigan Avenue", "")
        if let [split_name, split_suffix] = name.split(' ').collect::<Vec<_>>().as_slice() {
            if reference.contains_address(split_name, split_suffix) {
                log::trace!("exact match on split name: {name:?}");
                return StreetMatch::exact(*split_name, *split_suffix);
            }
        }

        let full = format!("{name} {suffix}");
        if reference.contains_name(&full) {
            log::trace!("exact standard name match: {full:?}");
            let matched_suffix = reference.unique_suffix(&full).unwrap_or_default().to_string();
            return StreetMatch::exact(full, matched_suffix);
        }

        let mut best = StreetMatch::none();

        for (standard_name, standard_suffix) in &reference.standard_addresses {
            let score = similarity(&full, &format!("{standard_name} {standard_suffix}"));
            if score > best.score {
                best = StreetMatch::new(standard_name.as_str(), standard_suffix.as_str(), score);
            }
        }

        if best.score < self.config.name_only_threshold {
            log::trace!(
                "full match {:?} scored {}, trying name only",
                best.name,
                best.score
            );
            for standard_name in &reference.standard_names {
                let score = similarity(&name, standard_name);
                if score > best.score {
                    // 有歧义时清空后缀，不保留上一个候选的后缀
                    let matched_suffix = reference.unique_suffix(standard_name).unwrap_or_default();
                    best = StreetMatch::new(standard_name.as_str(), matched_suffix, score);
                }
            }
        }

        best.name = best.name.trim().to_string();
        best.suffix = best.suffix.trim().to_string();

        log::debug!(
            "close match for {name:?} {suffix:?}: {:?} {:?} ({})",
            best.name,
            best.suffix,
            best.score
        );

        best
    }

    /// 批量匹配，同一批次内相同的输入只计算一次
    pub fn resolve_batch(&self, pairs: &[(&str, &str)]) -> Vec<StreetMatch> {
        let mut cache: HashMap<(&str, &str), StreetMatch> = HashMap::new();
        pairs
            .iter()
            .map(|&(name, suffix)| {
                cache
                    .entry((name, suffix))
                    .or_insert_with(|| self.close_match(name, suffix))
                    .clone()
            })
            .collect()
    }
}
