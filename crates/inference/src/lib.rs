//! ONNX hand landmark detection.

pub mod error;
pub use error::InferError;

pub mod inference;
pub use inference::Inference;

pub mod landmarker;
pub use landmarker::HandLandmarker;

pub mod postprocess;
pub mod preprocess;
