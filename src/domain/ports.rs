use crate::domain::model::{ConvertSummary, TransformResult};
use crate::utils::error::Result;

pub trait Pipeline {
    fn name(&self) -> &str;
    fn extract(&self) -> Result<Vec<String>>;
    fn transform(&self, tokens: Vec<String>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<ConvertSummary>;
}
