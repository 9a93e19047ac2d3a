use crate::error::AppError;
use crate::pipeline::orchestration::frame_context::{FrameContext, ProcessingStepType};
use crate::pipeline::orchestration::processing_step::ProcessingStep;
use crate::pipeline::services::GestureClassifier;
use crate::pipeline::types::Gesture;
use async_trait::async_trait;

pub struct ClassificationStep {
    classifier: GestureClassifier,
}

impl ClassificationStep {
    pub fn new(classifier: GestureClassifier) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl ProcessingStep for ClassificationStep {
    async fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        // No hand in view reads the same as an unrecognized one.
        context.gesture = match &context.hand {
            Some(hand) => self.classifier.classify(hand),
            None => Gesture::Unknown,
        };
        tracing::debug!("Classified gesture: {}", context.gesture);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ClassificationStep"
    }

    fn step_type(&self) -> ProcessingStepType {
        ProcessingStepType::Classification
    }
}
