pub mod dict;
pub mod etl;
pub mod parse;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{CodeRecord, ConversionJob, ConvertSummary, TransformResult};
pub use crate::domain::ports::Pipeline;
pub use crate::utils::error::Result;
