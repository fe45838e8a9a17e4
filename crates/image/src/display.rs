use crate::*;

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Packed `0xFFRRGGBB` pixels of an `Rgb8` buffer, the layout minifb windows expect.
pub fn rgb_to_u32(data: &[u8]) -> Vec<u32> {
    data.chunks_exact(3)
        .map(|chunk| pack_u32(chunk[0], chunk[1], chunk[2]))
        .collect()
}

/// Packed display buffer for any supported image.
pub fn image_to_u32(image: &Image) -> Result<Vec<u32>, ImageError> {
    match image.format {
        PixelFormat::Rgb8 => Ok(rgb_to_u32(&image.data)),
        _ => Ok(rgb_to_u32(&image.to_rgb()?.data)),
    }
}
