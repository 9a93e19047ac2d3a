mod classification;
mod debounce;
mod dispatch;
mod hand_selection;

pub use classification::ClassificationStep;
pub use debounce::DebounceStep;
pub use dispatch::DispatchStep;
pub use hand_selection::HandSelectionStep;
