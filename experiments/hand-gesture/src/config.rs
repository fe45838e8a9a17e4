use {
    anyhow::{Context, Result, bail},
    base::Vec2,
    gesture::GestureLabels,
    std::path::PathBuf,
    video::VideoInConfig,
};

pub const DEFAULT_MODEL_PATH: &str = "models/hand_landmark_full.onnx";
pub const DEFAULT_CAMERA_INDICES: [usize; 2] = [0, 1];
pub const CAPTURE_SIZE: Vec2<usize> = Vec2::new(640, 480);

/// Startup settings, read once from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    /// Log to daily files in this directory instead of stdout.
    pub log_dir: Option<PathBuf>,
    /// Cameras to try, in order.
    pub camera_indices: Vec<usize>,
    pub capture_size: Vec2<usize>,
    /// CUDA device ordinal for the landmark model, `None` runs it on the CPU.
    pub cuda_device: Option<usize>,
    pub labels: GestureLabels,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model_path = lookup("GESTURE_MODEL_PATH")
            .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string())
            .into();

        let log_dir = lookup("GESTURE_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let camera_indices = match lookup("GESTURE_CAMERA_INDICES") {
            Some(value) => parse_indices(&value)?,
            None => DEFAULT_CAMERA_INDICES.to_vec(),
        };

        let cuda_device = match lookup("GESTURE_DEVICE") {
            Some(value) => parse_device(&value)?,
            None => None,
        };

        let defaults = GestureLabels::default();
        let labels = GestureLabels {
            shaka: lookup("GESTURE_LABEL_SHAKA").unwrap_or(defaults.shaka),
            love_you: lookup("GESTURE_LABEL_LOVE_YOU").unwrap_or(defaults.love_you),
            pinky_up: lookup("GESTURE_LABEL_PINKY_UP").unwrap_or(defaults.pinky_up),
        };

        Ok(Self {
            model_path,
            log_dir,
            camera_indices,
            capture_size: CAPTURE_SIZE,
            cuda_device,
            labels,
        })
    }

    pub fn camera_candidates(&self) -> Vec<VideoInConfig> {
        self.camera_indices
            .iter()
            .map(|&index| VideoInConfig::new(index).with_size(self.capture_size))
            .collect()
    }
}

fn parse_indices(value: &str) -> Result<Vec<usize>> {
    let indices = value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .with_context(|| format!("invalid camera index {:?} in GESTURE_CAMERA_INDICES", part))
        })
        .collect::<Result<Vec<_>>>()?;
    if indices.is_empty() {
        bail!("GESTURE_CAMERA_INDICES lists no camera");
    }
    Ok(indices)
}

/// `cpu`, `cuda` (device 0) or `cuda:<ordinal>`.
fn parse_device(value: &str) -> Result<Option<usize>> {
    match value.trim() {
        "" | "cpu" => Ok(None),
        "cuda" => Ok(Some(0)),
        other => match other.strip_prefix("cuda:") {
            Some(ordinal) => ordinal
                .parse::<usize>()
                .map(Some)
                .with_context(|| format!("invalid CUDA ordinal {:?} in GESTURE_DEVICE", ordinal)),
            None => bail!("unknown GESTURE_DEVICE {:?}, expected cpu, cuda or cuda:<n>", other),
        },
    }
}
