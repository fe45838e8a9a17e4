use {base::Vec3, std::fmt};

/// Number of points in a hand skeleton.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Hand skeleton point indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl LandmarkIndex {
    pub const ALL: [LandmarkIndex; HAND_LANDMARK_COUNT] = [
        LandmarkIndex::Wrist,
        LandmarkIndex::ThumbCmc,
        LandmarkIndex::ThumbMcp,
        LandmarkIndex::ThumbIp,
        LandmarkIndex::ThumbTip,
        LandmarkIndex::IndexMcp,
        LandmarkIndex::IndexPip,
        LandmarkIndex::IndexDip,
        LandmarkIndex::IndexTip,
        LandmarkIndex::MiddleMcp,
        LandmarkIndex::MiddlePip,
        LandmarkIndex::MiddleDip,
        LandmarkIndex::MiddleTip,
        LandmarkIndex::RingMcp,
        LandmarkIndex::RingPip,
        LandmarkIndex::RingDip,
        LandmarkIndex::RingTip,
        LandmarkIndex::PinkyMcp,
        LandmarkIndex::PinkyPip,
        LandmarkIndex::PinkyDip,
        LandmarkIndex::PinkyTip,
    ];
}

impl From<LandmarkIndex> for usize {
    fn from(index: LandmarkIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for LandmarkIndex {
    type Error = LandmarkError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        LandmarkIndex::ALL
            .get(value)
            .copied()
            .ok_or(LandmarkError::Index(value))
    }
}

/// Bones of the hand skeleton, as pairs of connected points.
pub const HAND_CONNECTIONS: [(LandmarkIndex, LandmarkIndex); 21] = {
    use LandmarkIndex::*;
    [
        (Wrist, ThumbCmc),
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        (Wrist, IndexMcp),
        (IndexMcp, IndexPip),
        (IndexPip, IndexDip),
        (IndexDip, IndexTip),
        (IndexMcp, MiddleMcp),
        (MiddleMcp, MiddlePip),
        (MiddlePip, MiddleDip),
        (MiddleDip, MiddleTip),
        (MiddleMcp, RingMcp),
        (RingMcp, RingPip),
        (RingPip, RingDip),
        (RingDip, RingTip),
        (RingMcp, PinkyMcp),
        (Wrist, PinkyMcp),
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandmarkError {
    Count { expected: usize, got: usize },
    Index(usize),
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::Count { expected, got } => {
                write!(f, "expected {expected} hand landmarks, got {got}")
            }
            LandmarkError::Index(index) => write!(
                f,
                "invalid landmark index {index}, must be below {HAND_LANDMARK_COUNT}"
            ),
        }
    }
}

impl std::error::Error for LandmarkError {}

/// One detected hand.
///
/// `x` and `y` of every point are normalized to the frame (0..1, y pointing down),
/// `z` is depth relative to the wrist.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    pub points: [Vec3<f32>; HAND_LANDMARK_COUNT],
    /// Detector confidence that a hand is present.
    pub presence: f32,
    /// Raw handedness score from the detector.
    pub handedness: f32,
}

impl HandLandmarks {
    pub fn new(points: [Vec3<f32>; HAND_LANDMARK_COUNT]) -> Self {
        Self {
            points,
            presence: 1.0,
            handedness: 1.0,
        }
    }

    pub fn with_scores(mut self, presence: f32, handedness: f32) -> Self {
        self.presence = presence;
        self.handedness = handedness;
        self
    }

    pub fn point(&self, index: LandmarkIndex) -> Vec3<f32> {
        self.points[usize::from(index)]
    }
}

impl TryFrom<&[Vec3<f32>]> for HandLandmarks {
    type Error = LandmarkError;

    fn try_from(points: &[Vec3<f32>]) -> Result<Self, Self::Error> {
        let points: [Vec3<f32>; HAND_LANDMARK_COUNT] =
            points.try_into().map_err(|_| LandmarkError::Count {
                expected: HAND_LANDMARK_COUNT,
                got: points.len(),
            })?;
        Ok(Self::new(points))
    }
}
