use crate::core::parse::{pair_records, tokenize};
use crate::core::writer::write_csv_file;
use crate::domain::model::{ConversionJob, ConvertSummary, TransformResult};
use crate::domain::ports::Pipeline;
use crate::utils::error::{ConvertError, Result};
use std::path::Path;

pub struct CodeTablePipeline {
    job: ConversionJob,
}

impl CodeTablePipeline {
    pub fn new(job: ConversionJob) -> Self {
        Self { job }
    }
}

impl Pipeline for CodeTablePipeline {
    fn name(&self) -> &str {
        &self.job.name
    }

    fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading raw file: {}", self.job.source.display());
        let raw = std::fs::read_to_string(&self.job.source)
            .map_err(|e| ConvertError::source_read(&self.job.source, e))?;

        Ok(tokenize(&raw).into_iter().map(str::to_string).collect())
    }

    fn transform(&self, tokens: Vec<String>) -> Result<TransformResult> {
        Ok(pair_records(&tokens))
    }

    fn load(&self, result: TransformResult) -> Result<ConvertSummary> {
        tracing::debug!(
            "Writing {} rows to {}",
            result.records.len(),
            self.job.dest.display()
        );
        write_csv_file(&self.job.dest, &result.records)?;

        Ok(ConvertSummary {
            source: self.job.source.clone(),
            dest: self.job.dest.clone(),
            token_count: result.token_count,
            pair_count: result.pair_count,
            dropped_pairs: result.dropped_pairs,
            trailing_token: result.trailing_token,
            rows_written: result.records.len(),
        })
    }
}

/// 讀取 `source` 的代碼/名稱配對，排序後寫成 `dest` 的兩欄 CSV
///
/// `dest` 若已存在會被覆寫。讀取失敗回傳 [`ConvertError::SourceRead`]，
/// 寫入失敗回傳 [`ConvertError::DestWrite`]。
pub fn convert(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<ConvertSummary> {
    let job = ConversionJob::new("convert", source.as_ref(), dest.as_ref());
    crate::core::etl::run_pipeline(&CodeTablePipeline::new(job))
}
