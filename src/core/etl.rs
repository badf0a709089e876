use crate::core::dict::load_code_dict;
use crate::core::pipeline::CodeTablePipeline;
use crate::domain::model::{ConversionJob, ConvertSummary};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// 依序執行 extract / transform / load
pub fn run_pipeline(pipeline: &dyn Pipeline) -> Result<ConvertSummary> {
    let tokens = pipeline.extract()?;
    tracing::debug!("[{}] extracted {} tokens", pipeline.name(), tokens.len());

    let result = pipeline.transform(tokens)?;
    tracing::debug!(
        "[{}] kept {} of {} pairs",
        pipeline.name(),
        result.records.len(),
        result.pair_count
    );

    pipeline.load(result)
}

pub struct ConversionEngine {
    pipelines: Vec<Box<dyn Pipeline>>,
    verify: bool,
}

impl ConversionEngine {
    pub fn new() -> Self {
        Self {
            pipelines: Vec::new(),
            verify: false,
        }
    }

    pub fn from_jobs(jobs: Vec<ConversionJob>) -> Self {
        let mut engine = Self::new();
        for job in jobs {
            engine.add_pipeline(Box::new(CodeTablePipeline::new(job)));
        }
        engine
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn add_pipeline(&mut self, pipeline: Box<dyn Pipeline>) {
        self.pipelines.push(pipeline);
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// 按加入順序執行，遇到第一個錯誤即停止；已寫出的檔案保留
    pub fn run(&self) -> Result<Vec<ConvertSummary>> {
        let mut summaries = Vec::with_capacity(self.pipelines.len());

        for pipeline in &self.pipelines {
            tracing::info!("Converting {}...", pipeline.name());
            let summary = run_pipeline(pipeline.as_ref())?;

            if summary.dropped_pairs > 0 || summary.trailing_token {
                tracing::warn!(
                    "[{}] dropped {} malformed pairs{}",
                    pipeline.name(),
                    summary.dropped_pairs,
                    if summary.trailing_token {
                        " and one unpaired trailing token"
                    } else {
                        ""
                    }
                );
            }

            if self.verify {
                self.verify_output(pipeline.name(), &summary)?;
            }

            tracing::info!(
                "[{}] wrote {} rows to {}",
                pipeline.name(),
                summary.rows_written,
                summary.dest.display()
            );
            summaries.push(summary);
        }

        Ok(summaries)
    }

    fn verify_output(&self, name: &str, summary: &ConvertSummary) -> Result<()> {
        let dict = load_code_dict(&summary.dest)?;

        if dict.len() != summary.rows_written {
            tracing::warn!(
                "[{}] {} rows written but only {} distinct codes",
                name,
                summary.rows_written,
                dict.len()
            );
        } else {
            tracing::debug!("[{}] verified {} codes", name, dict.len());
        }

        Ok(())
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}
