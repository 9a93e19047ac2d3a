use crate::error::AppError;
use crate::pipeline::orchestration::frame_context::{FrameContext, ProcessingStepType};
use crate::pipeline::orchestration::processing_step::ProcessingStep;
use crate::pipeline::services::HandSelector;
use async_trait::async_trait;

pub struct HandSelectionStep {
    selector: HandSelector,
}

impl HandSelectionStep {
    pub fn new(selector: HandSelector) -> Self {
        Self { selector }
    }
}

#[async_trait]
impl ProcessingStep for HandSelectionStep {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        let hands = context.frame.hands();
        if hands.len() > 1 {
            tracing::debug!(
                "{} hands in frame, using {:?} rule",
                hands.len(),
                self.selector
            );
        }
        context.hand = self.selector.select(hands).cloned();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "HandSelectionStep"
    }

    fn step_type(&self) -> ProcessingStepType {
        ProcessingStepType::HandSelection
    }
}
