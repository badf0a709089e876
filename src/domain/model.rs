use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 一筆 (代碼, 名稱) 記錄
///
/// 欄位順序即排序順序：先比 `code`，再比 `name`，皆為字串比較。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CodeRecord {
    pub code: String,
    pub name: String,
}

impl CodeRecord {
    /// 兩個欄位都非空時才成立
    pub fn new(code: &str, name: &str) -> Option<Self> {
        if code.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self {
            code: code.to_string(),
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub records: Vec<CodeRecord>,
    pub token_count: usize,
    pub pair_count: usize,
    pub dropped_pairs: usize,
    pub trailing_token: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub token_count: usize,
    pub pair_count: usize,
    pub dropped_pairs: usize,
    pub trailing_token: bool,
    pub rows_written: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionJob {
    pub name: String,
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl ConversionJob {
    pub fn new(name: &str, source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            source: source.into(),
            dest: dest.into(),
        }
    }
}
