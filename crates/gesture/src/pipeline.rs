use {
    crate::*,
    base::{Rect, Vec2},
    image::{Image, ImageError},
};

/// Everything derived from one detected hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandAnalysis {
    pub hand: HandLandmarks,
    pub fingers: FingerStates,
    pub orientation: Orientation,
    pub gesture: Option<Gesture>,
    /// Pixel bounds of the landmarks, without padding.
    pub bbox: Rect<i32>,
}

impl HandAnalysis {
    /// Classify `hand` in a frame of `size` pixels using `rules`.
    pub fn new(hand: HandLandmarks, size: Vec2<usize>, rules: &RuleTable) -> Self {
        let fingers = finger::extract(&hand);
        let orientation = Orientation::from_landmarks(&hand);
        let gesture = rules.classify(fingers, orientation.is_downward_tilt());
        let bbox = overlay::bounding_box(&hand, size);
        Self {
            hand,
            fingers,
            orientation,
            gesture,
            bbox,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameResult {
    /// Mirrored frame, annotated when a hand was found.
    pub image: Image,
    pub analysis: Option<HandAnalysis>,
}

/// Per-frame processing: mirror, detect, classify, annotate.
///
/// Frames are independent; nothing carries over from one call to the next.
pub struct FramePipeline<P: LandmarkProvider> {
    provider: P,
    rules: RuleTable,
    labels: GestureLabels,
    style: OverlayStyle,
}

impl<P: LandmarkProvider> FramePipeline<P> {
    pub fn new(provider: P, labels: GestureLabels) -> Self {
        Self {
            provider,
            rules: RuleTable::default(),
            labels,
            style: OverlayStyle::default(),
        }
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn labels(&self) -> &GestureLabels {
        &self.labels
    }

    /// Process one `Rgb8` frame.
    ///
    /// A failing provider is logged and the frame is treated as having no hand. Errors
    /// only come from frames that are not `Rgb8`.
    pub fn process(&mut self, frame: &Image) -> Result<FrameResult, ImageError> {
        let mirrored = frame.flip_horizontal()?;

        let hand = match self.provider.detect(&mirrored) {
            Ok(hand) => hand,
            Err(error) => {
                log::warn!("landmark detection failed: {}", error);
                None
            }
        };

        let Some(hand) = hand else {
            log::debug!("no hand detected");
            return Ok(FrameResult {
                image: mirrored,
                analysis: None,
            });
        };

        let analysis = HandAnalysis::new(hand, mirrored.size, &self.rules);
        let label = self.labels.text(analysis.gesture);
        log::debug!(
            "fingers {} angle {:.1} gesture {:?}",
            analysis.fingers,
            analysis.orientation.angle_degrees,
            analysis.gesture
        );

        let image = overlay::annotate(
            &mirrored,
            &analysis.hand,
            analysis.bbox,
            label,
            &self.style,
        )?;

        Ok(FrameResult {
            image,
            analysis: Some(analysis),
        })
    }
}
