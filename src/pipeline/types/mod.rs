mod device_command;
mod finger_state;
mod gesture;

pub use device_command::{DeviceCommand, DispatchOutcome, SkipReason};
pub use finger_state::FingerState;
pub use gesture::Gesture;
