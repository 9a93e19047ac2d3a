pub mod common;
pub mod config;
pub mod coordinator;
pub mod device;
pub mod error;
pub mod intake;
pub mod pipeline;

pub use error::{AppError, DeviceError, SkeletonError};

pub use config::Configuration;
pub use coordinator::{Coordinator, CoordinatorBuilder, SessionSnapshot};
pub use device::{DeviceController, DeviceStatus, SimulatedDevice};
pub use pipeline::{ActionDebouncer, Gesture, GestureClassifier};
