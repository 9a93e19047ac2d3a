pub mod frame_context;
pub mod processing_pipeline;
pub mod processing_step;
pub mod step;

pub use frame_context::{FrameContext, FrameMetrics, ProcessingStepType};
pub use processing_pipeline::ProcessingPipeline;
pub use processing_step::ProcessingStep;
