use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use super::landmark::HandSkeleton;

/// One processed camera tick: zero or more detected hands.
#[derive(Clone, Debug)]
pub struct Frame {
    frame_id: Uuid,
    hands: Arc<[HandSkeleton]>,
    captured_at: DateTime<Utc>,
}

impl Frame {
    pub fn new(hands: Vec<HandSkeleton>, captured_at: DateTime<Utc>) -> Self {
        Self {
            frame_id: Uuid::new_v4(),
            hands: Arc::from(hands),
            captured_at,
        }
    }

    pub fn empty(captured_at: DateTime<Utc>) -> Self {
        Self::new(Vec::new(), captured_at)
    }

    pub fn frame_id(&self) -> Uuid {
        self.frame_id
    }

    pub fn hands(&self) -> &[HandSkeleton] {
        &self.hands
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}
