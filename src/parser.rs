//! 街道地址拆分器核心实现

use crate::components::AddressComponents;
use crate::dictionary::ReferenceTables;
use crate::text::{directional_initial, is_numeric, strip_separators, to_title_case};
use once_cell::sync::Lazy;

/// 全局拆分器实例（使用内置词表）
static GLOBAL_SPLITTER: Lazy<StreetSplitter<'static>> =
    Lazy::new(|| StreetSplitter::new(ReferenceTables::builtin()));

/// "<N> Mile Road" 中的 Mile
const MILE: &str = "Mile";

/// 词元类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    /// 纯数字
    Numeric,
    /// 方位词，携带大写首字母
    Directional(char),
    /// 普通词
    Word,
}

impl TokenKind {
    fn of(token: &str) -> Self {
        if is_numeric(token) {
            TokenKind::Numeric
        } else if let Some(initial) = directional_initial(token) {
            TokenKind::Directional(initial)
        } else {
            TokenKind::Word
        }
    }
}

/// 街道地址拆分器
///
/// 把自由文本地址拆成门牌号、街道名、方位前缀、后缀和其余部分。
/// 只持有参考词表的只读引用，每次调用互不影响。
#[derive(Debug, Clone, Copy)]
pub struct StreetSplitter<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> StreetSplitter<'a> {
    /// 使用给定词表创建拆分器
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// 获取全局拆分器实例（内置词表）
    pub fn global() -> &'static StreetSplitter<'static> {
        &GLOBAL_SPLITTER
    }

    /// 当前使用的词表
    pub fn tables(&self) -> &'a ReferenceTables {
        self.tables
    }

    /// 拆分地址字符串
    ///
    /// 空输入返回全空结果，从不失败；无法识别的词元落入 `other`。
    ///
    /// # 示例
    /// ```rust
    /// use streetaddr::{ReferenceTables, StreetSplitter};
    ///
    /// let splitter = StreetSplitter::new(ReferenceTables::builtin());
    /// let result = splitter.parse("56 Test Dr. unit 571");
    /// assert_eq!(result.street_number, "56");
    /// assert_eq!(result.street_name, "Test");
    /// assert_eq!(result.street_suffix, "Dr");
    /// assert_eq!(result.other, "unit 571");
    /// ```
    pub fn parse(&self, address: &str) -> AddressComponents {
        if address.trim().is_empty() {
            return AddressComponents::empty();
        }

        let cleaned = strip_separators(address);
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();

        // 后缀边界必须先从右向左单独确定
        let suffix_pos = self.last_suffix_position(&tokens);

        let mut street_number: Option<&str> = None;
        let mut street_name: Vec<&str> = Vec::new();
        let mut street_prefix: Option<char> = None;
        let mut street_suffix: Option<String> = None;
        let mut other: Vec<&str> = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];

            match TokenKind::of(token) {
                TokenKind::Numeric => {
                    if let Some(word) = self.mile_road_word(&tokens, i) {
                        street_name.push(word);
                        // 后缀之后的 Mile 不并入街道名，按普通词处理
                        if suffix_pos.map_or(true, |pos| i + 1 < pos) {
                            street_name.push(MILE);
                            i += 2;
                            continue;
                        }
                    } else if i == 0 {
                        street_number = Some(token);
                    } else {
                        other.push(token);
                    }
                }
                TokenKind::Directional(initial) => {
                    if street_prefix.is_none() {
                        street_prefix = Some(initial);
                    } else {
                        other.push(token);
                    }
                }
                TokenKind::Word => match suffix_pos {
                    // 后缀之后的部分，如 "11 Michigan Ave Unit 12" 中的 "Unit"
                    Some(pos) if i > pos => other.push(token),
                    // "11 Street" 这种情况下后缀位置的词其实是街道名
                    Some(pos) if i == pos => {
                        if street_name.is_empty() {
                            street_name.push(token);
                        } else {
                            street_suffix = Some(to_title_case(token));
                        }
                    }
                    _ => street_name.push(token),
                },
            }

            i += 1;
        }

        AddressComponents::new(
            street_number.unwrap_or_default(),
            street_name.join(" "),
            street_prefix.map(String::from).unwrap_or_default(),
            street_suffix.unwrap_or_default(),
            other.join(" "),
        )
    }

    /// 拆分可能为空值的地址
    pub fn parse_optional(&self, address: Option<&str>) -> AddressComponents {
        address.map(|a| self.parse(a)).unwrap_or_default()
    }

    /// 批量拆分地址，空值得到全空结果
    pub fn parse_batch(&self, addresses: &[Option<&str>]) -> Vec<AddressComponents> {
        addresses.iter().map(|a| self.parse_optional(*a)).collect()
    }

    /// 从右向左找最后一个后缀候选词的位置
    fn last_suffix_position(&self, tokens: &[&str]) -> Option<usize> {
        tokens
            .iter()
            .rposition(|t| self.tables.abbreviations.contains(&to_title_case(t)))
    }

    /// 第 `i` 个词元后紧跟 Mile 且数字在词表中时，返回对应单词
    fn mile_road_word(&self, tokens: &[&str], i: usize) -> Option<&'a str> {
        let next = tokens.get(i + 1)?;
        if *next != MILE {
            return None;
        }
        self.tables.mile_roads.word_for(tokens[i])
    }
}

impl Default for StreetSplitter<'static> {
    fn default() -> Self {
        Self::new(ReferenceTables::builtin())
    }
}
