use {
    crate::*,
    base::Vec2,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Black `Rgb8` image.
    pub fn blank(size: Vec2<usize>) -> Self {
        Self::new(size, vec![0u8; size.x * size.y * 3], PixelFormat::Rgb8)
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// Convert to `Rgb8`, decoding or unpacking as needed.
    pub fn to_rgb(&self) -> Result<Image, ImageError> {
        match self.format {
            PixelFormat::Rgb8 => {
                self.ensure_packed_len()?;
                Ok(self.clone())
            }
            PixelFormat::Yuyv => {
                self.ensure_packed_len()?;
                Ok(Image::new(
                    self.size,
                    yuyv_to_rgb(self.size, &self.data),
                    PixelFormat::Rgb8,
                ))
            }
            PixelFormat::Jpeg => jpeg_to_rgb(self),
        }
    }

    /// Mirror image around the vertical axis. Only packed `Rgb8` images are supported.
    pub fn flip_horizontal(&self) -> Result<Image, ImageError> {
        self.format.ensure_format(PixelFormat::Rgb8)?;
        self.ensure_packed_len()?;
        if self.size.x == 0 {
            return Err(ImageError::Size("cannot mirror a zero-width image".to_string()));
        }
        let row_len = self.size.x * 3;
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(row_len) {
            for pixel in row.chunks_exact(3).rev() {
                data.extend_from_slice(pixel);
            }
        }
        Ok(Image::new(self.size, data, PixelFormat::Rgb8))
    }

    /// Nearest-neighbor resize of an `Rgb8` image.
    pub fn resize_nearest(&self, size: Vec2<usize>) -> Result<Image, ImageError> {
        self.format.ensure_format(PixelFormat::Rgb8)?;
        self.ensure_packed_len()?;
        if self.size.x == 0 || self.size.y == 0 {
            return Err(ImageError::Size("cannot resize an empty image".to_string()));
        }
        let mut data = Vec::with_capacity(size.x * size.y * 3);
        for y in 0..size.y {
            let src_y = y * self.size.y / size.y;
            for x in 0..size.x {
                let src_x = x * self.size.x / size.x;
                let idx = (src_y * self.size.x + src_x) * 3;
                data.extend_from_slice(&self.data[idx..idx + 3]);
            }
        }
        Ok(Image::new(size, data, PixelFormat::Rgb8))
    }

    /// RGB value at `(x, y)` of an `Rgb8` image, `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if self.format != PixelFormat::Rgb8 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        let idx = (y * self.size.x + x) * 3;
        self.data.get(idx..idx + 3).map(|p| [p[0], p[1], p[2]])
    }

    fn ensure_packed_len(&self) -> Result<(), ImageError> {
        if let Some(bpp) = self.format.bytes_per_pixel() {
            let expected = self.size.x * self.size.y * bpp;
            if self.data.len() != expected {
                return Err(ImageError::Size(format!(
                    "{:?} image of {}x{} needs {} bytes, got {}",
                    self.format,
                    self.size.x,
                    self.size.y,
                    expected,
                    self.data.len()
                )));
            }
        }
        Ok(())
    }
}
