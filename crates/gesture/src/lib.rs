//! Hand gesture recognition on 21-point hand skeletons.
//!
//! A [`LandmarkProvider`] turns a frame into a [`HandLandmarks`] skeleton. From there the
//! finger states and the thumb orientation are derived, and the ordered [`RuleTable`] maps
//! them to a [`Gesture`]. [`FramePipeline`] runs all of it per frame and draws the result.

mod landmark;
pub use landmark::*;

pub mod finger;
pub use finger::{Finger, FingerStates};

pub mod orientation;
pub use orientation::Orientation;

pub mod classifier;
pub use classifier::{Gesture, Rule, RuleTable, Tilt};

mod labels;
pub use labels::*;

mod provider;
pub use provider::*;

pub mod overlay;
pub use overlay::OverlayStyle;

mod pipeline;
pub use pipeline::*;
