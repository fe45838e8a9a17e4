use {crate::*, image::Image};

/// One captured frame, in whatever format the device delivered.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub color: Image,
}

impl VideoFrame {
    /// The frame as `Rgb8`, decoding MJPEG or unpacking YUYV when needed.
    pub fn to_rgb(&self) -> Result<Image, VideoError> {
        Ok(self.color.to_rgb()?)
    }
}
