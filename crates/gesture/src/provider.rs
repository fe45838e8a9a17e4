use {crate::*, image::Image, std::fmt};

/// Detector settings, fixed when the provider is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderConfig {
    pub max_hands: usize,
    /// Minimum presence score for a hand to be reported.
    pub min_detection_confidence: f32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            max_hands: 1,
            min_detection_confidence: 0.7,
        }
    }
}

/// Source of hand skeletons.
pub trait LandmarkProvider {
    type Error: fmt::Display;

    /// Skeleton of the most confident hand in `image` (an `Rgb8` frame), or `None` if no
    /// hand passes the configured confidence.
    fn detect(&mut self, image: &Image) -> Result<Option<HandLandmarks>, Self::Error>;
}
