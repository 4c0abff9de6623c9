//! 错误类型定义
//!
//! 只有参考数据加载层会失败，拆分与匹配本身永远返回值。

use thiserror::Error;

/// 参考数据加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    /// 文件或目录读取失败
    #[error("Failed to read reference data at {path}: {source}")]
    Io {
        /// 出错的路径
        path: String,
        /// 底层 I/O 错误
        source: std::io::Error,
    },

    /// TOML 词表或配置格式错误
    #[error("Invalid reference table: {0}")]
    Toml(#[from] toml::de::Error),

    /// 标准地址 CSV 格式错误
    #[error("Invalid reference CSV: {0}")]
    Csv(#[from] csv::Error),

    /// CSV 表头缺少指定列
    #[error("Missing column in reference CSV: {0}")]
    MissingColumn(String),

    /// 词表内容不合法
    #[error("Invalid reference table content: {0}")]
    InvalidTable(String),
}
