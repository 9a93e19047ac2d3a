use crate::error::AppError;
use crate::pipeline::orchestration::frame_context::{FrameContext, ProcessingStepType};
use crate::pipeline::orchestration::processing_step::ProcessingStep;
use crate::pipeline::services::ActionService;
use async_trait::async_trait;
use tower::ServiceExt;

pub struct DispatchStep {
    action_service: ActionService,
}

impl DispatchStep {
    pub fn new(action_service: ActionService) -> Self {
        Self { action_service }
    }
}

#[async_trait]
impl ProcessingStep for DispatchStep {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        if !context.triggered {
            return Ok(());
        }
        // Accepted by the debouncer already; a failed command is not retried.
        match self.action_service.clone().oneshot(context.gesture).await {
            Ok(outcome) => context.outcome = Some(outcome),
            Err(e) => {
                tracing::error!("Dispatch of {} failed: {}", context.gesture, e);
                context.dispatch_error = Some(e);
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DispatchStep"
    }

    fn step_type(&self) -> ProcessingStepType {
        ProcessingStepType::Dispatch
    }
}
