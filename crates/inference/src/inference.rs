use {
    crate::*,
    gesture::ProviderConfig,
    ort::session::Session as OrtSession,
    std::{path::Path, sync::OnceLock},
};

static ORT_INIT: OnceLock<()> = OnceLock::new();

fn ensure_ort_init() {
    ORT_INIT.get_or_init(|| {
        let _ = ort::init().commit();
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnnxDevice {
    Cpu,
    Cuda(usize),
}

/// Entry point for loading models on a device.
#[derive(Debug)]
pub struct Inference {
    device: OnnxDevice,
}

impl Inference {
    pub fn cpu() -> Self {
        Self {
            device: OnnxDevice::Cpu,
        }
    }

    /// Sessions fail to build unless the crate is compiled with the `cuda` feature.
    pub fn cuda(ordinal: usize) -> Self {
        Self {
            device: OnnxDevice::Cuda(ordinal),
        }
    }

    pub fn onnx_session(&self, model_path: impl AsRef<Path>) -> Result<OrtSession, InferError> {
        let path = model_path.as_ref();
        if !path.is_file() {
            return Err(InferError::Io(format!(
                "model file not found: {}",
                path.display()
            )));
        }
        ensure_ort_init();

        let builder = OrtSession::builder().map_err(|e| {
            InferError::Onnx(format!("failed to create session builder: {}", e))
        })?;
        let builder = match self.device {
            OnnxDevice::Cpu => builder
                .with_execution_providers([
                    ort::execution_providers::CPUExecutionProvider::default().build(),
                ])
                .map_err(|e| InferError::Onnx(e.to_string()))?,
            #[cfg(feature = "cuda")]
            OnnxDevice::Cuda(ordinal) => builder
                .with_execution_providers([
                    ort::execution_providers::CUDAExecutionProvider::default()
                        .with_device_id(ordinal as i32)
                        .build(),
                    ort::execution_providers::CPUExecutionProvider::default().build(),
                ])
                .map_err(|e| InferError::Onnx(e.to_string()))?,
            #[cfg(not(feature = "cuda"))]
            OnnxDevice::Cuda(_) => {
                return Err(InferError::Onnx("CUDA feature not enabled".to_string()));
            }
        };

        let session = builder.commit_from_file(path).map_err(|e| {
            InferError::Onnx(format!("failed to load {}: {}", path.display(), e))
        })?;
        log::info!("loaded model {} on {:?}", path.display(), self.device);
        Ok(session)
    }

    pub fn use_hand_landmarker(
        &self,
        model_path: impl AsRef<Path>,
        config: ProviderConfig,
    ) -> Result<HandLandmarker, InferError> {
        let session = self.onnx_session(model_path)?;
        Ok(HandLandmarker::new(session, config))
    }
}
