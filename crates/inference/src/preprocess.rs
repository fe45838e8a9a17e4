use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
};

/// Side of the square model input, in pixels.
pub const INPUT_SIZE: usize = 224;

/// Model input for `image`: stretched to `INPUT_SIZE` square, NCHW, RGB in `[0, 1]`.
///
/// Stretching keeps the mapping back to the frame a plain division by `INPUT_SIZE` on
/// each axis.
pub fn preprocess(image: &Image) -> Result<Vec<f32>, InferError> {
    let resized = match image.format {
        PixelFormat::Rgb8 => image.resize_nearest(Vec2::new(INPUT_SIZE, INPUT_SIZE))?,
        _ => image
            .to_rgb()?
            .resize_nearest(Vec2::new(INPUT_SIZE, INPUT_SIZE))?,
    };

    let plane = INPUT_SIZE * INPUT_SIZE;
    let mut nchw = vec![0.0f32; 3 * plane];
    for (i, pixel) in resized.data.chunks_exact(3).enumerate() {
        for ch in 0..3 {
            nchw[ch * plane + i] = pixel[ch] as f32 / 255.0;
        }
    }
    Ok(nchw)
}
