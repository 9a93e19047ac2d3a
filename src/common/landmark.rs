use serde::{Deserialize, Serialize};

use crate::error::SkeletonError;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// A point in normalized image coordinates. Depth is carried but never read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// The 21 hand landmarks of one detected hand, in the usual wrist-first order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct HandSkeleton {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandSkeleton {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn bounding_box_area(&self) -> f32 {
        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for point in &self.landmarks {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }
        (max_x - min_x) * (max_y - min_y)
    }
}

impl TryFrom<Vec<Landmark>> for HandSkeleton {
    type Error = SkeletonError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        let actual = landmarks.len();
        let landmarks: [Landmark; LANDMARK_COUNT] =
            landmarks.try_into().map_err(|_| SkeletonError::LandmarkCount {
                expected: LANDMARK_COUNT,
                actual,
            })?;
        Ok(Self { landmarks })
    }
}

impl From<HandSkeleton> for Vec<Landmark> {
    fn from(skeleton: HandSkeleton) -> Self {
        skeleton.landmarks.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_landmark_count() {
        let err = HandSkeleton::try_from(vec![Landmark::default(); 20]).unwrap_err();
        assert_eq!(
            err,
            SkeletonError::LandmarkCount {
                expected: 21,
                actual: 20
            }
        );
    }

    #[test]
    fn deserializes_without_depth() {
        let points: Vec<String> = (0..21)
            .map(|i| format!(r#"{{"x":{},"y":0.5}}"#, i as f32 / 100.0))
            .collect();
        let json = format!("[{}]", points.join(","));
        let skeleton: HandSkeleton = serde_json::from_str(&json).unwrap();
        assert_eq!(skeleton.landmark(THUMB_TIP), Landmark::new(0.04, 0.5));
    }

    #[test]
    fn short_skeleton_fails_to_deserialize() {
        assert!(serde_json::from_str::<HandSkeleton>(r#"[{"x":0.1,"y":0.1}]"#).is_err());
    }

    #[test]
    fn bounding_box_covers_all_points() {
        let mut landmarks = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        landmarks[WRIST] = Landmark::new(0.2, 0.9);
        landmarks[MIDDLE_TIP] = Landmark::new(0.6, 0.1);
        let area = HandSkeleton::new(landmarks).bounding_box_area();
        assert!((area - 0.4 * 0.8).abs() < 1e-6);
    }
}
