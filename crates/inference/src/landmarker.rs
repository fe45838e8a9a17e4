use {
    crate::{
        postprocess::postprocess,
        preprocess::{INPUT_SIZE, preprocess},
        *,
    },
    gesture::{HandLandmarks, LandmarkProvider, ProviderConfig},
    image::Image,
    ort::{session::Session as OrtSession, value::Tensor},
};

/// Single-hand landmark model (224x224 input).
///
/// Outputs, in order: 63 landmark values, presence score, handedness score. The model
/// sees the whole frame, so it expects the hand to fill a good part of it.
pub struct HandLandmarker {
    session: OrtSession,
    config: ProviderConfig,
}

fn first_value(values: &[f32], name: &str) -> Result<f32, InferError> {
    values
        .first()
        .copied()
        .ok_or_else(|| InferError::Shape(format!("{} output is empty", name)))
}

impl HandLandmarker {
    pub fn new(session: OrtSession, config: ProviderConfig) -> Self {
        Self { session, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl LandmarkProvider for HandLandmarker {
    type Error = InferError;

    fn detect(&mut self, image: &Image) -> Result<Option<HandLandmarks>, InferError> {
        let config = self.config;
        let input = preprocess(image)?;
        let tensor = Tensor::from_array(([1usize, 3, INPUT_SIZE, INPUT_SIZE], input))
            .map_err(|e| InferError::Onnx(format!("failed to create input tensor: {}", e)))?;

        let outputs = self
            .session
            .run(ort::inputs![tensor])
            .map_err(|e| InferError::Onnx(format!("inference failed: {}", e)))?;
        if outputs.len() < 3 {
            return Err(InferError::Shape(format!(
                "expected at least 3 model outputs, got {}",
                outputs.len()
            )));
        }

        let extract = |index: usize| {
            outputs[index]
                .try_extract_tensor::<f32>()
                .map(|(_, data)| data)
                .map_err(|e| InferError::Onnx(format!("output {} is not f32: {}", index, e)))
        };
        let landmarks = extract(0)?;
        let presence = first_value(extract(1)?, "presence")?;
        let handedness = first_value(extract(2)?, "handedness")?;
        log::debug!("hand presence {:.2} handedness {:.2}", presence, handedness);

        postprocess(landmarks, presence, handedness, &config)
    }
}
