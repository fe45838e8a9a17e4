use crate::*;

pub const DEFAULT_SHAKA_TEXT: &str = "Maara Jayega...";
pub const DEFAULT_LOVE_YOU_TEXT: &str = "Nai";
pub const DEFAULT_PINKY_UP_TEXT: &str = "Nature's Call !!!";

/// Display text for each gesture. The fixed gestures have fixed text; the three custom
/// ones can be relabeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureLabels {
    pub shaka: String,
    pub love_you: String,
    pub pinky_up: String,
}

impl Default for GestureLabels {
    fn default() -> Self {
        Self {
            shaka: DEFAULT_SHAKA_TEXT.to_string(),
            love_you: DEFAULT_LOVE_YOU_TEXT.to_string(),
            pinky_up: DEFAULT_PINKY_UP_TEXT.to_string(),
        }
    }
}

impl GestureLabels {
    /// Text to show for a classification result; empty when nothing was recognized.
    pub fn text(&self, gesture: Option<Gesture>) -> &str {
        let Some(gesture) = gesture else {
            return "";
        };
        match gesture {
            Gesture::Hi => "Hi",
            Gesture::ThumbsUp => "Thumbs Up",
            Gesture::ThumbsDown => "Thumbs Down",
            Gesture::LiveLong => "Live Long",
            Gesture::Victory => "Victory",
            Gesture::Peace => "Peace",
            Gesture::PointUp => "Point Up",
            Gesture::Fist => "Fist",
            Gesture::Shaka => &self.shaka,
            Gesture::LoveYou => &self.love_you,
            Gesture::PinkyUp => &self.pinky_up,
        }
    }
}
