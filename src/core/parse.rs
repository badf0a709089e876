use crate::domain::model::{CodeRecord, TransformResult};

// 只認 ASCII 空白，U+3000 等全形空白屬於 token 的一部分
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// 把整份原始文字切成 token，換行不具意義
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .flat_map(|line| line.split(is_separator))
        .filter(|token| !token.is_empty())
        .collect()
}

/// 兩兩配對、過濾不完整的配對並排序
pub fn pair_records<S: AsRef<str>>(tokens: &[S]) -> TransformResult {
    let pairs = tokens.chunks_exact(2);
    let trailing_token = !pairs.remainder().is_empty();

    let mut records = Vec::with_capacity(tokens.len() / 2);
    let mut pair_count = 0;
    let mut dropped_pairs = 0;

    for pair in pairs {
        pair_count += 1;
        match CodeRecord::new(pair[0].as_ref(), pair[1].as_ref()) {
            Some(record) => records.push(record),
            None => {
                tracing::debug!(
                    "Dropping malformed pair ({:?}, {:?})",
                    pair[0].as_ref(),
                    pair[1].as_ref()
                );
                dropped_pairs += 1;
            }
        }
    }

    if trailing_token {
        tracing::debug!(
            "Discarding unpaired trailing token {:?}",
            tokens[tokens.len() - 1].as_ref()
        );
    }

    records.sort();

    TransformResult {
        records,
        token_count: tokens.len(),
        pair_count,
        dropped_pairs,
        trailing_token,
    }
}
