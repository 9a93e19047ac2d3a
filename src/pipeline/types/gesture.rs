use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete hand gesture recognized from a single skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gesture {
    Fist,
    Palm,
    OneFinger,
    Peace,
    ThumbsUp,
    ThumbsDown,
    Unknown,
}

impl Gesture {
    pub const ALL: [Gesture; 7] = [
        Gesture::Fist,
        Gesture::Palm,
        Gesture::OneFinger,
        Gesture::Peace,
        Gesture::ThumbsUp,
        Gesture::ThumbsDown,
        Gesture::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fist => "FIST",
            Self::Palm => "PALM",
            Self::OneFinger => "ONE_FINGER",
            Self::Peace => "PEACE",
            Self::ThumbsUp => "THUMBS_UP",
            Self::ThumbsDown => "THUMBS_DOWN",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
