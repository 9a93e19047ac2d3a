use crate::common::landmark::{
    HandSkeleton, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP, THUMB_IP, THUMB_MCP, THUMB_TIP,
};
use crate::pipeline::types::{FingerState, Gesture};

const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
const FINGER_PIPS: [usize; 4] = [INDEX_PIP, MIDDLE_PIP, RING_PIP, PINKY_PIP];

const ONE_FINGER: [bool; 5] = [false, true, false, false, false];
const PEACE: [bool; 5] = [false, true, true, false, false];
const THUMB_ONLY: [bool; 5] = [true, false, false, false, false];

/// Rule-based gesture classifier over a single hand skeleton.
///
/// Expects a horizontally mirrored (selfie view) image: the thumb test compares
/// x coordinates and only holds for a front-facing hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureClassifier;

impl GestureClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn finger_state(&self, skeleton: &HandSkeleton) -> FingerState {
        let mut fingers = [false; 5];
        fingers[0] = skeleton.landmark(THUMB_TIP).x < skeleton.landmark(THUMB_IP).x;
        for (slot, (tip, pip)) in FINGER_TIPS.iter().zip(FINGER_PIPS.iter()).enumerate() {
            fingers[slot + 1] = skeleton.landmark(*tip).y < skeleton.landmark(*pip).y;
        }
        FingerState(fingers)
    }

    /// First matching rule wins; anything unmodeled is `Unknown`.
    pub fn classify(&self, skeleton: &HandSkeleton) -> Gesture {
        let fingers = self.finger_state(skeleton);

        match fingers.extended_count() {
            0 => return Gesture::Fist,
            5 => return Gesture::Palm,
            _ => {}
        }

        if fingers.matches(ONE_FINGER) {
            return Gesture::OneFinger;
        }
        if fingers.matches(PEACE) {
            return Gesture::Peace;
        }
        if fingers.matches(THUMB_ONLY) {
            let tip = skeleton.landmark(THUMB_TIP).y;
            let base = skeleton.landmark(THUMB_MCP).y;
            if tip < base {
                return Gesture::ThumbsUp;
            }
            if tip > base {
                return Gesture::ThumbsDown;
            }
        }

        Gesture::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::landmark::{Landmark, LANDMARK_COUNT};

    /// Builds a skeleton with every point at the palm center, then raises or
    /// lowers the listed tips relative to their joints.
    fn hand(fingers: [bool; 5]) -> [Landmark; LANDMARK_COUNT] {
        let mut points = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        points[THUMB_TIP].x = if fingers[0] { 0.4 } else { 0.6 };
        for (slot, tip) in FINGER_TIPS.iter().enumerate() {
            points[*tip].y = if fingers[slot + 1] { 0.3 } else { 0.7 };
        }
        points
    }

    fn classify(points: [Landmark; LANDMARK_COUNT]) -> Gesture {
        GestureClassifier::new().classify(&HandSkeleton::new(points))
    }

    #[test]
    fn coincident_landmarks_are_a_fist() {
        for value in [0.0, 0.25, 0.5, 1.0] {
            let points = [Landmark::new(value, value); LANDMARK_COUNT];
            assert_eq!(classify(points), Gesture::Fist);
        }
    }

    #[test]
    fn all_extended_is_a_palm() {
        assert_eq!(classify(hand([true; 5])), Gesture::Palm);
    }

    #[test]
    fn index_only_is_one_finger() {
        let points = hand(ONE_FINGER);
        let skeleton = HandSkeleton::new(points);
        assert_eq!(
            GestureClassifier::new().finger_state(&skeleton),
            FingerState(ONE_FINGER)
        );
        assert_eq!(classify(points), Gesture::OneFinger);
    }

    #[test]
    fn index_and_middle_is_peace() {
        assert_eq!(classify(hand(PEACE)), Gesture::Peace);
    }

    #[test]
    fn thumb_direction_splits_up_and_down() {
        let mut points = hand(THUMB_ONLY);
        points[THUMB_TIP].y = 0.2;
        points[THUMB_MCP].y = 0.5;
        assert_eq!(classify(points), Gesture::ThumbsUp);

        points[THUMB_TIP].y = 0.8;
        assert_eq!(classify(points), Gesture::ThumbsDown);
    }

    #[test]
    fn level_thumb_falls_through_to_unknown() {
        let mut points = hand(THUMB_ONLY);
        points[THUMB_TIP].y = 0.5;
        points[THUMB_MCP].y = 0.5;
        assert_eq!(classify(points), Gesture::Unknown);
    }

    #[test]
    fn unmodeled_patterns_are_unknown() {
        for pattern in [
            [false, false, false, false, true],
            [true, true, false, false, false],
            [false, true, true, true, false],
            [false, false, true, false, false],
        ] {
            assert_eq!(classify(hand(pattern)), Gesture::Unknown, "{:?}", pattern);
        }
    }

    #[test]
    fn thumb_uses_ip_joint_for_extension() {
        let mut points = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        points[THUMB_TIP].x = 0.45;
        points[THUMB_IP].x = 0.4;
        points[THUMB_MCP].x = 0.9;
        assert!(!GestureClassifier::new().finger_state(&HandSkeleton::new(points)).0[0]);
    }

    #[test]
    fn classification_is_deterministic() {
        let mut points = hand(PEACE);
        points[INDEX_TIP].x = 0.123;
        let first = classify(points);
        for _ in 0..10 {
            assert_eq!(classify(points), first);
        }
    }
}
