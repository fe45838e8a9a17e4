use {
    anyhow::Result,
    base::log,
    gesture::{FramePipeline, LandmarkProvider},
    image::Image,
    std::fmt,
};

/// Blocking source of `Rgb8` frames.
pub trait FrameSource {
    type Error: fmt::Display;

    fn next_frame(&mut self) -> Result<Image, Self::Error>;
}

/// Where processed frames are shown.
pub trait FrameSink {
    /// False once the user asked to quit.
    fn is_open(&self) -> bool;

    fn show(&mut self, image: &Image) -> Result<()>;

    /// Handle input events when there is no new frame to show.
    fn idle(&mut self);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub frames: usize,
    pub hands: usize,
    pub skipped: usize,
}

/// Capture, process and show frames until the sink closes.
///
/// Frames that cannot be read or processed are logged and skipped. Only a failing sink
/// ends the loop with an error.
pub fn run<S, P, D>(
    source: &mut S,
    pipeline: &mut FramePipeline<P>,
    sink: &mut D,
) -> Result<RunStats>
where
    S: FrameSource,
    P: LandmarkProvider,
    D: FrameSink,
{
    let mut stats = RunStats::default();

    while sink.is_open() {
        let frame = match source.next_frame() {
            Ok(frame) => frame,
            Err(error) => {
                log::warn!("failed to capture frame: {}", error);
                stats.skipped += 1;
                sink.idle();
                continue;
            }
        };
        log::debug!("captured {}x{} frame", frame.width(), frame.height());

        let result = match pipeline.process(&frame) {
            Ok(result) => result,
            Err(error) => {
                log::warn!("failed to process frame: {}", error);
                stats.skipped += 1;
                sink.idle();
                continue;
            }
        };
        if result.analysis.is_some() {
            stats.hands += 1;
        }

        sink.show(&result.image)?;
        stats.frames += 1;
    }

    Ok(stats)
}
