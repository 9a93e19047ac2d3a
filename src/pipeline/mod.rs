pub mod orchestration;
pub mod services;
pub mod types;

pub use orchestration::{FrameContext, ProcessingPipeline};
pub use services::{ActionDebouncer, ActionService, GestureClassifier, HandSelector};
pub use types::{DeviceCommand, DispatchOutcome, FingerState, Gesture};
