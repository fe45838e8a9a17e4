use crate::*;

/// Angle above which a hand counts as tilted downward, in degrees.
pub const DOWNWARD_TILT_DEGREES: f32 = 45.0;

/// Direction of the wrist to thumb tip vector.
///
/// Measured in image space (x right, y down), so positive angles point below the wrist.
/// Only separates upright from downward; a sideways hand is not detected as such.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub angle_degrees: f32,
}

impl Orientation {
    pub fn from_landmarks(hand: &HandLandmarks) -> Self {
        let wrist = hand.point(LandmarkIndex::Wrist).xy();
        let thumb_tip = hand.point(LandmarkIndex::ThumbTip).xy();
        Self {
            angle_degrees: (thumb_tip - wrist).angle_degrees(),
        }
    }

    /// Strictly greater than [`DOWNWARD_TILT_DEGREES`].
    pub fn is_downward_tilt(&self) -> bool {
        self.angle_degrees > DOWNWARD_TILT_DEGREES
    }
}

pub fn is_downward_tilt(hand: &HandLandmarks) -> bool {
    Orientation::from_landmarks(hand).is_downward_tilt()
}
