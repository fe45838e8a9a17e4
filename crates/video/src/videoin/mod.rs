use {
    crate::*,
    base::Vec2,
    image::PixelFormat,
};

/// Requested camera settings. `None` fields keep whatever the device currently uses.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoInConfig {
    pub index: usize,
    pub size: Option<Vec2<usize>>,
    pub format: Option<PixelFormat>,
    pub frame_rate: Option<f32>,
}

impl VideoInConfig {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            size: None,
            format: None,
            frame_rate: None,
        }
    }

    pub fn with_size(mut self, size: Vec2<usize>) -> Self {
        self.size = Some(size);
        self
    }
}

pub trait VideoInDevice: Send {
    /// Short backend name for log output.
    fn backend(&self) -> &str;

    /// Open the device; returns the configuration that was actually applied.
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError>;

    /// Close the device, if open.
    fn close(&mut self);

    /// Block until the next frame is available.
    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError>;
}

pub struct VideoIn {
    device: Box<dyn VideoInDevice>,
    config: VideoInConfig,
}

impl VideoIn {
    /// Open the first camera in `candidates` that works, using the platform backend.
    pub fn open(candidates: &[VideoInConfig]) -> Result<Self, VideoError> {
        #[cfg(feature = "v4l2")]
        {
            Self::open_device(Box::new(v4l2::V4l2::new()), candidates)
        }
        #[cfg(not(feature = "v4l2"))]
        {
            let _ = candidates;
            Err(VideoError::Device("no video backend enabled".to_string()))
        }
    }

    /// Try each candidate on `device` in order, keeping the first that opens.
    pub fn open_device(
        mut device: Box<dyn VideoInDevice>,
        candidates: &[VideoInConfig],
    ) -> Result<Self, VideoError> {
        for candidate in candidates {
            match device.open(candidate) {
                Ok(config) => {
                    let size = config.size.unwrap_or_default();
                    log::info!(
                        "camera {} opened: {}x{} at {:.1} fps, format {:?}, backend {}",
                        config.index,
                        size.x,
                        size.y,
                        config.frame_rate.unwrap_or(0.0),
                        config.format,
                        device.backend(),
                    );
                    return Ok(Self { device, config });
                }
                Err(error) => {
                    log::warn!("camera {} failed to open: {}", candidate.index, error);
                    device.close();
                }
            }
        }

        let tried = candidates
            .iter()
            .map(|c| c.index.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(VideoError::Device(format!(
            "no camera could be opened (tried: [{}])",
            tried
        )))
    }

    pub fn config(&self) -> &VideoInConfig {
        &self.config
    }

    pub fn index(&self) -> usize {
        self.config.index
    }

    pub fn size(&self) -> Vec2<usize> {
        self.config.size.unwrap_or_default()
    }

    pub fn format(&self) -> Option<PixelFormat> {
        self.config.format
    }

    pub fn frame_rate(&self) -> f32 {
        self.config.frame_rate.unwrap_or(0.0)
    }

    pub fn capture(&mut self) -> Result<VideoFrame, VideoError> {
        self.device.blocking_capture()
    }
}

impl Drop for VideoIn {
    fn drop(&mut self) {
        self.device.close();
        log::info!("camera {} released", self.config.index);
    }
}

#[cfg(feature = "v4l2")]
pub mod v4l2;
