use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pipeline::types::Gesture;

pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceState {
    pub last_gesture: Option<Gesture>,
    pub last_trigger_time: Option<DateTime<Utc>>,
}

/// Throttles repeats of the same gesture; a change of gesture always passes.
#[derive(Debug, Clone)]
pub struct ActionDebouncer {
    cooldown: Duration,
    state: DebounceState,
}

impl ActionDebouncer {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            state: DebounceState {
                last_gesture: None,
                last_trigger_time: None,
            },
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn should_trigger(&mut self, gesture: Gesture, now: DateTime<Utc>) -> bool {
        if gesture.is_unknown() {
            return false;
        }

        if self.state.last_gesture == Some(gesture) {
            let elapsed = self
                .state
                .last_trigger_time
                .and_then(|last| now.signed_duration_since(last).to_std().ok())
                .unwrap_or(Duration::ZERO);
            if elapsed < self.cooldown {
                return false;
            }
        }

        self.state.last_gesture = Some(gesture);
        // Out-of-order timestamps never move the trigger time backwards.
        self.state.last_trigger_time = Some(match self.state.last_trigger_time {
            Some(last) if last > now => last,
            _ => now,
        });
        true
    }
}

impl Default for ActionDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

/// Debouncer shared between threads; each decision holds the lock for the
/// whole compare-and-update.
#[derive(Debug, Clone, Default)]
pub struct SharedDebouncer {
    inner: Arc<Mutex<ActionDebouncer>>,
}

impl SharedDebouncer {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ActionDebouncer::new(cooldown))),
        }
    }

    pub fn should_trigger(&self, gesture: Gesture, now: DateTime<Utc>) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .should_trigger(gesture, now)
    }

    pub fn state(&self) -> DebounceState {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .state()
    }
}
