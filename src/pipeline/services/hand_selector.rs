use serde::Deserialize;

use crate::common::landmark::HandSkeleton;

/// Rule for picking the one hand a frame is classified by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandSelector {
    /// Largest bounding box; ties go to the earlier hand.
    #[default]
    Largest,
    First,
}

impl HandSelector {
    pub fn select<'a>(&self, hands: &'a [HandSkeleton]) -> Option<&'a HandSkeleton> {
        match self {
            Self::First => hands.first(),
            Self::Largest => hands.iter().fold(None, |best, hand| match best {
                Some(current) if current.bounding_box_area() >= hand.bounding_box_area() => {
                    Some(current)
                }
                _ => Some(hand),
            }),
        }
    }
}
