use super::frame_context::{FrameContext, ProcessingStepType};
use crate::error::AppError;
use async_trait::async_trait;

/// Chain of Responsibility pattern for processing pipeline
#[async_trait]
pub trait ProcessingStep: Send + Sync {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError>;
    fn name(&self) -> &'static str;
    fn step_type(&self) -> ProcessingStepType;
}
