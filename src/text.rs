//! 拆分器与匹配器共用的字符串工具

/// 会被替换为空格的分隔符，不会出现在任何输出字段中
const SEPARATORS: [char; 3] = ['.', '#', '-'];

/// 方位词（大写形式）
const DIRECTIONALS: [&str; 8] = ["E", "W", "S", "N", "EAST", "WEST", "NORTH", "SOUTH"];

/// 转为标题大小写
///
/// 与 Python 的 `str.title()` 一致：每段连续字母的首字母大写，其余小写，
/// 数字和标点会开启新的一段（"1st" -> "1St"，"o'neil" -> "O'Neil"）。
///
/// ```rust
/// use streetaddr::text::to_title_case;
///
/// assert_eq!(to_title_case("ROAD"), "Road");
/// assert_eq!(to_title_case("best of america"), "Best Of America");
/// ```
pub fn to_title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut previous_cased = false;

    for ch in s.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased {
            if previous_cased {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
        } else {
            result.push(ch);
        }
        previous_cased = cased;
    }

    result
}

/// 把 `.`、`#`、`-` 替换为空格
pub fn strip_separators(s: &str) -> String {
    s.chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect()
}

/// 是否为纯数字词元
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}

/// 方位词的大写首字母（E/W/N/S），不是方位词时返回 `None`
pub fn directional_initial(token: &str) -> Option<char> {
    let upper = token.to_uppercase();
    if DIRECTIONALS.contains(&upper.as_str()) {
        upper.chars().next()
    } else {
        None
    }
}

/// 忽略大小写的相似度，取值 0..=100
///
/// 只计插入和删除的编辑距离：`2 * LCS / (len(a) + len(b))`，
/// 替换一个字符相当于删一次再插一次。两个空串视为完全相同。
pub fn similarity(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }

    let common = longest_common_subsequence(&a, &b);
    let ratio = (2 * common) as f64 / total as f64;
    (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// 最长公共子序列长度，两行滚动数组
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
