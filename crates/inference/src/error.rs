use std::fmt;

#[derive(Debug)]
pub enum InferError {
    Onnx(String),
    Shape(String),
    Io(String),
    Image(image::ImageError),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Onnx(msg) => write!(f, "onnx error: {msg}"),
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
            InferError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<image::ImageError> for InferError {
    fn from(err: image::ImageError) -> Self {
        InferError::Image(err)
    }
}

impl From<gesture::LandmarkError> for InferError {
    fn from(err: gesture::LandmarkError) -> Self {
        InferError::Shape(err.to_string())
    }
}
