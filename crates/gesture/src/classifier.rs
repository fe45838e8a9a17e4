//! Gesture classification.
//!
//! Rules are checked top to bottom and the first match wins, so the thumb rules rely on
//! the tilt condition to split up and down.

use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Hi,
    ThumbsUp,
    ThumbsDown,
    LiveLong,
    Victory,
    Peace,
    PointUp,
    Fist,
    /// Thumb and pinky out.
    Shaka,
    /// Thumb, index and pinky out.
    LoveYou,
    /// Pinky alone.
    PinkyUp,
}

impl Gesture {
    pub const ALL: [Gesture; 11] = [
        Gesture::Hi,
        Gesture::ThumbsUp,
        Gesture::ThumbsDown,
        Gesture::LiveLong,
        Gesture::Victory,
        Gesture::Peace,
        Gesture::PointUp,
        Gesture::Fist,
        Gesture::Shaka,
        Gesture::LoveYou,
        Gesture::PinkyUp,
    ];
}

/// Thumb orientation a rule requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    Any,
    Upright,
    Downward,
}

impl Tilt {
    pub fn matches(self, downward_tilt: bool) -> bool {
        match self {
            Tilt::Any => true,
            Tilt::Upright => !downward_tilt,
            Tilt::Downward => downward_tilt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub fingers: FingerStates,
    pub tilt: Tilt,
    pub gesture: Gesture,
}

impl Rule {
    pub const fn new(bits: [u8; 5], tilt: Tilt, gesture: Gesture) -> Self {
        Self {
            fingers: FingerStates::from_bits(bits),
            tilt,
            gesture,
        }
    }

    pub fn matches(&self, fingers: FingerStates, downward_tilt: bool) -> bool {
        self.fingers == fingers && self.tilt.matches(downward_tilt)
    }
}

pub const DEFAULT_RULES: [Rule; 11] = [
    Rule::new([1, 1, 1, 1, 1], Tilt::Any, Gesture::Hi),
    Rule::new([1, 0, 0, 0, 0], Tilt::Upright, Gesture::ThumbsUp),
    Rule::new([1, 0, 0, 0, 0], Tilt::Downward, Gesture::ThumbsDown),
    Rule::new([1, 1, 1, 0, 0], Tilt::Any, Gesture::LiveLong),
    Rule::new([0, 1, 1, 0, 0], Tilt::Any, Gesture::Victory),
    Rule::new([0, 0, 0, 1, 1], Tilt::Any, Gesture::Peace),
    Rule::new([0, 1, 0, 0, 0], Tilt::Any, Gesture::PointUp),
    Rule::new([0, 0, 0, 0, 0], Tilt::Any, Gesture::Fist),
    Rule::new([1, 0, 0, 0, 1], Tilt::Any, Gesture::Shaka),
    Rule::new([1, 1, 0, 0, 1], Tilt::Any, Gesture::LoveYou),
    Rule::new([0, 0, 0, 0, 1], Tilt::Any, Gesture::PinkyUp),
];

/// Ordered gesture rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    rules: &'static [Rule],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(&DEFAULT_RULES)
    }
}

impl RuleTable {
    /// Table over a rule list fixed at build time.
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        self.rules
    }

    /// First matching gesture, or `None` when no rule applies.
    pub fn classify(&self, fingers: FingerStates, downward_tilt: bool) -> Option<Gesture> {
        self.rules
            .iter()
            .find(|rule| rule.matches(fingers, downward_tilt))
            .map(|rule| rule.gesture)
    }
}

pub fn classify(fingers: FingerStates, downward_tilt: bool) -> Option<Gesture> {
    RuleTable::default().classify(fingers, downward_tilt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_gesture_has_a_rule() {
        for gesture in Gesture::ALL {
            assert!(DEFAULT_RULES.iter().any(|rule| rule.gesture == gesture));
        }
    }

    #[test]
    fn test_thumb_rules_split_on_tilt() {
        let thumb = FingerStates::from_bits([1, 0, 0, 0, 0]);
        assert_eq!(classify(thumb, false), Some(Gesture::ThumbsUp));
        assert_eq!(classify(thumb, true), Some(Gesture::ThumbsDown));
    }
}
