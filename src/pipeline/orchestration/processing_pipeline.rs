use super::frame_context::FrameContext;
use super::processing_step::ProcessingStep;
use super::step::{ClassificationStep, DebounceStep, DispatchStep, HandSelectionStep};
use crate::device::SharedDevice;
use crate::error::AppError;
use crate::pipeline::services::{ActionService, GestureClassifier, HandSelector, SharedDebouncer};
use std::time::Instant;

/// A pipeline that processes frames through a chain of steps
pub struct ProcessingPipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
    enable_metrics: bool,
}

impl ProcessingPipeline {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            enable_metrics: false,
        }
    }

    /// Hand selection, classification, debounce and dispatch, in that order.
    pub fn gesture_control(
        selector: HandSelector,
        debouncer: SharedDebouncer,
        device: SharedDevice,
    ) -> Self {
        Self::new()
            .add_step(Box::new(HandSelectionStep::new(selector)))
            .add_step(Box::new(ClassificationStep::new(GestureClassifier::new())))
            .add_step(Box::new(DebounceStep::new(debouncer)))
            .add_step(Box::new(DispatchStep::new(ActionService::new(device))))
    }

    pub fn add_step(mut self, step: Box<dyn ProcessingStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn enable_metrics(mut self, enable_metrics: bool) -> Self {
        self.enable_metrics = enable_metrics;
        self
    }

    pub async fn process(&mut self, mut context: FrameContext) -> Result<FrameContext, AppError> {
        for step in &mut self.steps {
            tracing::debug!("Processing step: {}", step.name());
            let started = Instant::now();
            step.process(&mut context).await?;
            context
                .metrics
                .record_duration(step.step_type(), started.elapsed().as_micros() as u64);
        }
        context.metrics.finalize(context.processing_start);
        if self.enable_metrics {
            tracing::info!(
                frame_id = %context.frame.frame_id(),
                gesture = %context.gesture,
                total_us = context.metrics.total_processing_duration_us,
                "Frame processed"
            );
        }
        Ok(context)
    }
}

impl Default for ProcessingPipeline {
    fn default() -> Self {
        Self::new()
    }
}
