#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::ConversionJob;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_unique_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 不帶參數執行時的兩組轉換，順序固定
pub fn default_jobs() -> Vec<ConversionJob> {
    vec![
        ConversionJob::new("area_code", "raw_area_code.txt", "area_code.csv"),
        ConversionJob::new("epicenter_code", "raw_epicenter_code.txt", "epicenter_code.csv"),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub base_dir: Option<PathBuf>,
    pub verify: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobsConfig {
    #[serde(default)]
    pub settings: Settings,
    pub conversions: Vec<ConversionJob>,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            conversions: default_jobs(),
        }
    }
}

impl JobsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConvertError::config_read(path.as_ref(), e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn verify_enabled(&self) -> bool {
        self.settings.verify.unwrap_or(false)
    }

    /// 套用 base_dir 後的實際轉換清單；`base_dir` 參數優先於設定檔
    pub fn resolve_jobs(&self, base_dir: Option<&Path>) -> Vec<ConversionJob> {
        let base = base_dir.or(self.settings.base_dir.as_deref());

        self.conversions
            .iter()
            .map(|job| match base {
                Some(base) => ConversionJob {
                    name: job.name.clone(),
                    source: base.join(&job.source),
                    dest: base.join(&job.dest),
                },
                None => job.clone(),
            })
            .collect()
    }
}

/// 檢查實際路徑：輸出不可覆寫任何一個轉換的輸入，也不可與其他轉換共用輸出
pub fn validate_job_paths(jobs: &[ConversionJob]) -> Result<()> {
    for (i, job) in jobs.iter().enumerate() {
        for (j, other) in jobs.iter().enumerate() {
            let reason = if job.dest == other.source {
                if i == j {
                    format!("Conversion '{}' would overwrite its own source", job.name)
                } else {
                    format!(
                        "Conversion '{}' would overwrite the source of '{}'",
                        job.name, other.name
                    )
                }
            } else if i != j && job.dest == other.dest {
                format!(
                    "Conversions '{}' and '{}' write the same file",
                    job.name, other.name
                )
            } else {
                continue;
            };

            return Err(ConvertError::InvalidConfigValueError {
                field: "conversions.dest".to_string(),
                value: job.dest.display().to_string(),
                reason,
            });
        }
    }
    Ok(())
}

impl Validate for JobsConfig {
    fn validate(&self) -> Result<()> {
        if self.conversions.is_empty() {
            return Err(ConvertError::ConfigError {
                message: "At least one [[conversions]] entry is required".to_string(),
            });
        }

        for job in &self.conversions {
            validate_non_empty_string("conversions.name", &job.name)?;
            validate_path("conversions.source", &job.source.to_string_lossy())?;
            validate_path("conversions.dest", &job.dest.to_string_lossy())?;
        }

        validate_unique_names(
            "conversions.name",
            self.conversions.iter().map(|job| job.name.as_str()),
        )?;

        validate_job_paths(&self.resolve_jobs(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_jobs_order() {
        let config = JobsConfig::default();
        let jobs = config.resolve_jobs(None);

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].source, PathBuf::from("raw_area_code.txt"));
        assert_eq!(jobs[0].dest, PathBuf::from("area_code.csv"));
        assert_eq!(jobs[1].source, PathBuf::from("raw_epicenter_code.txt"));
        assert_eq!(jobs[1].dest, PathBuf::from("epicenter_code.csv"));
        assert!(config.validate().is_ok());
        assert!(!config.verify_enabled());
    }

    #[test]
    fn test_parse_jobs_toml() {
        let toml_content = r#"
[settings]
base_dir = "data"
verify = true

[[conversions]]
name = "area_code"
source = "raw_area_code.txt"
dest = "area_code.csv"
"#;

        let config = JobsConfig::from_toml_str(toml_content).unwrap();

        assert!(config.verify_enabled());
        let jobs = config.resolve_jobs(None);
        assert_eq!(jobs[0].source, Path::new("data").join("raw_area_code.txt"));

        // 命令列的 base_dir 優先
        let jobs = config.resolve_jobs(Some(Path::new("other")));
        assert_eq!(jobs[0].dest, Path::new("other").join("area_code.csv"));
    }

    #[test]
    fn test_settings_are_optional() {
        let toml_content = r#"
[[conversions]]
name = "epicenter_code"
source = "raw_epicenter_code.txt"
dest = "epicenter_code.csv"
"#;

        let config = JobsConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.settings, Settings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CODE_TABLE_TEST_DIR", "/tmp/codes");

        let toml_content = r#"
[[conversions]]
name = "area_code"
source = "${CODE_TABLE_TEST_DIR}/raw_area_code.txt"
dest = "${CODE_TABLE_TEST_UNSET}/area_code.csv"
"#;

        let config = JobsConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.conversions[0].source,
            PathBuf::from("/tmp/codes/raw_area_code.txt")
        );
        assert_eq!(
            config.conversions[0].dest,
            PathBuf::from("${CODE_TABLE_TEST_UNSET}/area_code.csv")
        );

        std::env::remove_var("CODE_TABLE_TEST_DIR");
    }

    #[test]
    fn test_invalid_toml() {
        let err = JobsConfig::from_toml_str("[[conversions]\nname =").unwrap_err();
        assert!(matches!(err, ConvertError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let empty = JobsConfig {
            settings: Settings::default(),
            conversions: vec![],
        };
        assert!(empty.validate().is_err());

        let self_overwrite = JobsConfig {
            settings: Settings::default(),
            conversions: vec![ConversionJob::new("x", "same.txt", "same.txt")],
        };
        assert!(self_overwrite.validate().is_err());

        let duplicate = JobsConfig {
            settings: Settings::default(),
            conversions: vec![
                ConversionJob::new("x", "a.txt", "a.csv"),
                ConversionJob::new("x", "b.txt", "b.csv"),
            ],
        };
        assert!(duplicate.validate().is_err());

        let missing_name = JobsConfig {
            settings: Settings::default(),
            conversions: vec![ConversionJob::new(" ", "a.txt", "a.csv")],
        };
        assert!(missing_name.validate().is_err());

        let empty_path = JobsConfig {
            settings: Settings::default(),
            conversions: vec![ConversionJob::new("x", "", "a.csv")],
        };
        assert!(empty_path.validate().is_err());
    }

    #[test]
    fn test_dest_must_not_overwrite_another_source() {
        let config = JobsConfig {
            settings: Settings::default(),
            conversions: vec![
                ConversionJob::new("one", "a.txt", "b.txt"),
                ConversionJob::new("two", "b.txt", "b.csv"),
            ],
        };

        match config.validate().unwrap_err() {
            ConvertError::InvalidConfigValueError { value, reason, .. } => {
                assert_eq!(value, "b.txt");
                assert!(reason.contains("'two'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dest_shared_by_two_jobs() {
        let config = JobsConfig {
            settings: Settings::default(),
            conversions: vec![
                ConversionJob::new("one", "a.txt", "codes.csv"),
                ConversionJob::new("two", "b.txt", "codes.csv"),
            ],
        };

        assert!(matches!(
            config.validate().unwrap_err(),
            ConvertError::InvalidConfigValueError { .. }
        ));
    }

    #[test]
    fn test_collisions_checked_after_base_dir() {
        let jobs = vec![
            ConversionJob::new("one", "a.txt", "b.txt"),
            ConversionJob::new("two", "b.txt", "b.csv"),
        ];
        assert!(validate_job_paths(&jobs).is_err());

        let config = JobsConfig {
            settings: Settings::default(),
            conversions: vec![
                ConversionJob::new("one", "a.txt", "a.csv"),
                ConversionJob::new("two", "data/b.txt", "b.csv"),
            ],
        };
        let resolved = config.resolve_jobs(Some(Path::new("data")));
        assert!(validate_job_paths(&resolved).is_ok());
        assert!(validate_job_paths(&default_jobs()).is_ok());
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = JobsConfig::from_file(dir.path().join("jobs.toml")).unwrap_err();

        match err {
            ConvertError::ConfigError { message } => {
                assert!(message.contains("config file"));
                assert!(message.contains("jobs.toml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[[conversions]]
name = "file-test"
source = "in.txt"
dest = "out.csv"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = JobsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.conversions[0].name, "file-test");
    }
}
