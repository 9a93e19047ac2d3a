pub mod frame;
pub mod landmark;

pub use frame::Frame;
pub use landmark::{HandSkeleton, Landmark, LANDMARK_COUNT};
