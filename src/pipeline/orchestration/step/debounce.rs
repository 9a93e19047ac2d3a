use crate::error::AppError;
use crate::pipeline::orchestration::frame_context::{FrameContext, ProcessingStepType};
use crate::pipeline::orchestration::processing_step::ProcessingStep;
use crate::pipeline::services::SharedDebouncer;
use async_trait::async_trait;

pub struct DebounceStep {
    debouncer: SharedDebouncer,
}

impl DebounceStep {
    pub fn new(debouncer: SharedDebouncer) -> Self {
        Self { debouncer }
    }
}

#[async_trait]
impl ProcessingStep for DebounceStep {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        context.triggered = context.hand.is_some()
            && !context.gesture.is_unknown()
            && self
                .debouncer
                .should_trigger(context.gesture, context.frame.captured_at());
        if context.triggered {
            tracing::info!("[GESTURE: {}]", context.gesture);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DebounceStep"
    }

    fn step_type(&self) -> ProcessingStepType {
        ProcessingStepType::Debounce
    }
}
