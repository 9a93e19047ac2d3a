use crate::common::{Frame, HandSkeleton};
use crate::error::AppError;
use crate::pipeline::types::{DispatchOutcome, Gesture};
use std::time::Instant;

/// Everything the steps learn about one frame on its way through the pipeline.
pub struct FrameContext {
    pub frame: Frame,
    pub hand: Option<HandSkeleton>,
    pub gesture: Gesture,
    pub triggered: bool,
    pub outcome: Option<DispatchOutcome>,
    pub dispatch_error: Option<AppError>,
    pub metrics: FrameMetrics,
    pub processing_start: Instant,
}

impl FrameContext {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            hand: None,
            gesture: Gesture::Unknown,
            triggered: false,
            outcome: None,
            dispatch_error: None,
            metrics: FrameMetrics::new(),
            processing_start: Instant::now(),
        }
    }
}

/// Metrics collected during frame processing
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    pub hand_selection_duration_us: u64,
    pub classification_duration_us: u64,
    pub debounce_duration_us: u64,
    pub dispatch_duration_us: u64,
    pub total_processing_duration_us: u64,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_duration(&mut self, step: ProcessingStepType, duration_us: u64) {
        match step {
            ProcessingStepType::HandSelection => self.hand_selection_duration_us = duration_us,
            ProcessingStepType::Classification => self.classification_duration_us = duration_us,
            ProcessingStepType::Debounce => self.debounce_duration_us = duration_us,
            ProcessingStepType::Dispatch => self.dispatch_duration_us = duration_us,
        }
    }

    pub fn finalize(&mut self, start_time: Instant) {
        self.total_processing_duration_us = start_time.elapsed().as_micros() as u64;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingStepType {
    HandSelection,
    Classification,
    Debounce,
    Dispatch,
}
