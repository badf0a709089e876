use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read source file {path}: {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write destination file {path}: {source}")]
    DestWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid code in {path} at row {row}: {code:?}")]
    InvalidCode {
        path: String,
        row: u64,
        code: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConvertError {
    pub fn source_read(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn dest_write(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::DestWrite {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn config_read(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::ConfigError {
            message: format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                source
            ),
        }
    }

    /// 給使用者的處理建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::SourceRead { .. } => {
                "Check that the raw file exists, is readable and is UTF-8 text"
            }
            Self::DestWrite { .. } => {
                "Check that the output directory exists and is writable"
            }
            Self::CsvError(_) => "Check that the CSV file was produced by this tool",
            Self::InvalidCode { .. } => {
                "Codes must be exactly three bytes; regenerate the CSV from its raw file"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the job configuration file and run again"
            }
        }
    }

    /// 依錯誤類別決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SourceRead { .. } | Self::DestWrite { .. } => 1,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => 2,
            Self::CsvError(_) | Self::InvalidCode { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
