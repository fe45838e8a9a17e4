//! Frame images for the gesture pipeline.
//!
//! An [`Image`] is a tightly packed pixel buffer plus its size and [`PixelFormat`].
//! Capture devices hand out YUYV or MJPEG frames; everything downstream works on
//! `Rgb8` images obtained through [`Image::to_rgb`].

pub mod display;
pub mod draw;
pub mod error;
pub mod image;
pub mod pixelformat;
pub mod rgb;

pub use display::*;
pub use error::ImageError;
pub use image::Image;
pub use pixelformat::PixelFormat;
pub use rgb::*;
