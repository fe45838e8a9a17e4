use {
    crate::{preprocess::INPUT_SIZE, *},
    base::Vec3,
    gesture::{HAND_LANDMARK_COUNT, HandLandmarks, ProviderConfig},
};

/// Floats in the model's landmark output: x, y, z per point.
pub const LANDMARK_VALUES: usize = HAND_LANDMARK_COUNT * 3;

/// Turn raw model outputs into a hand skeleton.
///
/// `landmarks` are in model input pixels and get normalized to `[0, 1]`. Returns `None`
/// when `presence` is below the configured minimum or not a number. Non-finite landmark
/// values are a shape error.
pub fn postprocess(
    landmarks: &[f32],
    presence: f32,
    handedness: f32,
    config: &ProviderConfig,
) -> Result<Option<HandLandmarks>, InferError> {
    if landmarks.len() != LANDMARK_VALUES {
        return Err(InferError::Shape(format!(
            "expected {} landmark values, got {}",
            LANDMARK_VALUES,
            landmarks.len()
        )));
    }
    if config.max_hands == 0 || presence.is_nan() || presence < config.min_detection_confidence {
        return Ok(None);
    }
    if let Some(i) = landmarks.iter().position(|v| !v.is_finite()) {
        return Err(InferError::Shape(format!(
            "landmark {} has non-finite value {}",
            i / 3,
            landmarks[i]
        )));
    }

    let scale = INPUT_SIZE as f32;
    let points: Vec<Vec3<f32>> = landmarks
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0] / scale, c[1] / scale, c[2] / scale))
        .collect();
    let hand = HandLandmarks::try_from(points.as_slice())?.with_scores(presence, handedness);
    Ok(Some(hand))
}
