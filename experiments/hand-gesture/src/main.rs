mod config;
mod run;

use {
    anyhow::Result,
    base::{log, log_fatal},
    config::AppConfig,
    gesture::{FramePipeline, ProviderConfig},
    image::{Image, image_to_u32},
    inference::Inference,
    minifb::{Key, Window, WindowOptions},
    run::{FrameSink, FrameSource},
    video::{VideoError, VideoIn},
};

const WINDOW_TITLE: &str = "Hand Gesture Detection";

struct Camera {
    video_in: VideoIn,
}

impl FrameSource for Camera {
    type Error = VideoError;

    fn next_frame(&mut self) -> Result<Image, VideoError> {
        self.video_in.capture()?.to_rgb()
    }
}

struct WindowSink {
    window: Window,
}

impl FrameSink for WindowSink {
    fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    fn show(&mut self, image: &Image) -> Result<()> {
        let buffer = image_to_u32(image)?;
        self.window
            .update_with_buffer(&buffer, image.width(), image.height())?;
        Ok(())
    }

    fn idle(&mut self) {
        self.window.update();
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    match &config.log_dir {
        Some(dir) => base::init_file_logger(dir)?,
        None => base::init_stdout_logger(),
    }

    log::info!("Hand Gesture Detection");
    log::info!("model: {}", config.model_path.display());
    log::info!("cameras to try: {:?}", config.camera_indices);

    // load the model before touching the camera
    let inference = match config.cuda_device {
        Some(ordinal) => Inference::cuda(ordinal),
        None => Inference::cpu(),
    };
    let landmarker =
        match inference.use_hand_landmarker(&config.model_path, ProviderConfig::default()) {
            Ok(landmarker) => landmarker,
            Err(error) => log_fatal!("could not load landmark model: {}", error),
        };
    let mut pipeline = FramePipeline::new(landmarker, config.labels.clone());

    let video_in = match VideoIn::open(&config.camera_candidates()) {
        Ok(video_in) => video_in,
        Err(error) => log_fatal!("could not open a camera: {}", error),
    };
    let size = video_in.size();
    let mut source = Camera { video_in };

    let window = Window::new(WINDOW_TITLE, size.x, size.y, WindowOptions::default())?;
    let mut sink = WindowSink { window };

    log::info!("running, press ESC to exit");
    let stats = run::run(&mut source, &mut pipeline, &mut sink)?;
    log::info!(
        "processed {} frames, {} with a hand, {} skipped",
        stats.frames,
        stats.hands,
        stats.skipped
    );

    drop(source);
    drop(sink);
    log::info!("window closed");
    Ok(())
}
