pub mod action_service;
pub mod classifier;
pub mod debouncer;
pub mod hand_selector;

pub use action_service::{action_for, ActionService, VOLUME_STEP};
pub use classifier::GestureClassifier;
pub use debouncer::{ActionDebouncer, DebounceState, SharedDebouncer, DEFAULT_COOLDOWN};
pub use hand_selector::HandSelector;
