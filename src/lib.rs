pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;
pub use config::{default_jobs, JobsConfig};

pub use crate::core::{
    dict::{load_code_dict, CodeDict},
    etl::ConversionEngine,
    pipeline::{convert, CodeTablePipeline},
};
pub use domain::model::{CodeRecord, ConversionJob, ConvertSummary};
pub use utils::error::{ConvertError, Result};
