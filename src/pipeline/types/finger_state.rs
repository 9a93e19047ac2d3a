/// Extension flags in thumb, index, middle, ring, pinky order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FingerState(pub [bool; 5]);

impl FingerState {
    pub fn extended_count(&self) -> usize {
        self.0.iter().filter(|extended| **extended).count()
    }

    pub fn matches(&self, pattern: [bool; 5]) -> bool {
        self.0 == pattern
    }
}
