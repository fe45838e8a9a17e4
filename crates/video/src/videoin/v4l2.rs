use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

pub(crate) struct V4l2 {
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl V4l2 {
    pub fn new() -> Self {
        Self {
            stream: None,
            size: Vec2::new(0, 0),
            format: PixelFormat::Yuyv,
        }
    }
}

fn interval_to_fps(numerator: u32, denominator: u32) -> f32 {
    if numerator == 0 {
        0.0
    } else {
        denominator as f32 / numerator as f32
    }
}

impl VideoInDevice for V4l2 {
    fn backend(&self) -> &str {
        "v4l2"
    }

    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError> {
        // close stream
        self.stream.take();

        let device = Device::new(config.index)?;
        let device_format = Capture::format(&device)?;

        // build size
        let desired_size = match config.size {
            Some(size) => size,
            None => Vec2::new(device_format.width as usize, device_format.height as usize),
        };

        // build pixel format
        let desired_fourcc = match config.format {
            Some(format) => FourCC::new(&format.as_fourcc().to_le_bytes()),
            None => device_format.fourcc,
        };

        // set the format and get the actual format back
        let actual_format = Capture::set_format(
            &device,
            &Format::new(desired_size.x as u32, desired_size.y as u32, desired_fourcc),
        )?;

        self.size = Vec2::new(actual_format.width as usize, actual_format.height as usize);
        self.format = PixelFormat::from_fourcc(u32::from_le_bytes(actual_format.fourcc.repr))?;

        // set the frame rate if requested, then read back what the device runs at
        if let Some(frame_rate) = config.frame_rate {
            Capture::set_params(
                &device,
                &v4l::video::capture::Parameters::with_fps(frame_rate as u32),
            )?;
        }
        let params = Capture::params(&device)?;
        let frame_rate = interval_to_fps(params.interval.numerator, params.interval.denominator);

        self.stream = match MmapStream::with_buffers(&device, Type::VideoCapture, 4u32) {
            Ok(stream) => Some(stream),
            Err(error) => {
                return Err(VideoError::Stream(error.to_string()));
            }
        };

        Ok(VideoInConfig {
            index: config.index,
            size: Some(self.size),
            format: Some(self.format),
            frame_rate: Some(frame_rate),
        })
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(VideoError::Stream("No stream".to_string()));
        };
        match CaptureStream::next(stream) {
            Ok((frame_data, metadata)) => {
                // some drivers leave bytesused at 0
                let used = match metadata.bytesused as usize {
                    0 => frame_data.len(),
                    n => n.min(frame_data.len()),
                };
                Ok(VideoFrame {
                    color: Image::new(self.size, frame_data[..used].to_vec(), self.format),
                })
            }
            Err(error) => Err(VideoError::Stream(error.to_string())),
        }
    }
}
