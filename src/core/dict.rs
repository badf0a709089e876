use crate::utils::error::{ConvertError, Result};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

pub const CODE_LEN: usize = 3;

/// 由產生出來的 CSV 載入的代碼表，鍵為代碼的 3 個位元組
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeDict {
    entries: HashMap<[u8; CODE_LEN], String>,
}

impl CodeDict {
    pub fn get(&self, code: &str) -> Option<&str> {
        let key: [u8; CODE_LEN] = code.as_bytes().try_into().ok()?;
        self.entries.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 讀回 `code,name` 格式的 CSV；重複的代碼以最後一筆為準
pub fn load_code_dict(path: &Path) -> Result<CodeDict> {
    let file = File::open(path).map_err(|e| ConvertError::source_read(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut entries = HashMap::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let row = index as u64 + 1;

        let invalid = |code: &str| ConvertError::InvalidCode {
            path: path.display().to_string(),
            row,
            code: code.to_string(),
        };

        if record.len() != 2 {
            return Err(invalid(record.get(0).unwrap_or_default()));
        }

        let code = &record[0];
        let key: [u8; CODE_LEN] = code.as_bytes().try_into().map_err(|_| invalid(code))?;

        entries.insert(key, record[1].to_string());
    }

    tracing::debug!("Loaded {} codes from {}", entries.len(), path.display());
    Ok(CodeDict { entries })
}
