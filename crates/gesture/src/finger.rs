//! Finger state extraction.
//!
//! A finger counts as extended when its tip lies beyond a reference joint. For the four
//! long fingers that is "above the PIP joint" (smaller y). The thumb is tested sideways:
//! its tip must be left of the IP joint, which holds for a right hand in a mirrored frame.
//! Neither test is rotation invariant.

use {
    crate::*,
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn tip(self) -> LandmarkIndex {
        match self {
            Finger::Thumb => LandmarkIndex::ThumbTip,
            Finger::Index => LandmarkIndex::IndexTip,
            Finger::Middle => LandmarkIndex::MiddleTip,
            Finger::Ring => LandmarkIndex::RingTip,
            Finger::Pinky => LandmarkIndex::PinkyTip,
        }
    }

    /// Joint the tip is compared against.
    pub fn reference_joint(self) -> LandmarkIndex {
        match self {
            Finger::Thumb => LandmarkIndex::ThumbIp,
            Finger::Index => LandmarkIndex::IndexPip,
            Finger::Middle => LandmarkIndex::MiddlePip,
            Finger::Ring => LandmarkIndex::RingPip,
            Finger::Pinky => LandmarkIndex::PinkyPip,
        }
    }
}

/// Extended (`true`) or folded state per finger, thumb first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FingerStates(pub [bool; 5]);

impl FingerStates {
    pub const fn new(states: [bool; 5]) -> Self {
        Self(states)
    }

    /// Build from `0`/`1` flags, e.g. `[1, 0, 0, 0, 0]` for a lone thumb.
    pub const fn from_bits(bits: [u8; 5]) -> Self {
        Self([
            bits[0] != 0,
            bits[1] != 0,
            bits[2] != 0,
            bits[3] != 0,
            bits[4] != 0,
        ])
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.0[finger as usize]
    }

    pub fn extended_count(&self) -> usize {
        self.0.iter().filter(|&&extended| extended).count()
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }
}

impl fmt::Display for FingerStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, &extended) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", extended as u8)?;
        }
        write!(f, "]")
    }
}

pub fn extract(hand: &HandLandmarks) -> FingerStates {
    let mut states = [false; 5];
    for (state, finger) in states.iter_mut().zip(Finger::ALL) {
        let tip = hand.point(finger.tip());
        let joint = hand.point(finger.reference_joint());
        *state = match finger {
            Finger::Thumb => tip.x < joint.x,
            _ => tip.y < joint.y,
        };
    }
    FingerStates(states)
}
