//! Drawing primitives on `Rgb8` images.
//!
//! Shapes and text go through `embedded-graphics`; everything is clipped to the image.
//! Rectangles are given by their two corners, both inclusive.

use {
    crate::*,
    base::{Rect, Vec2},
    embedded_graphics::{
        mono_font::{MonoTextStyle, ascii::FONT_10X20},
        pixelcolor::Rgb888,
        prelude::*,
        primitives::{Circle, Line, PrimitiveStyle, Rectangle},
        text::{Baseline, Text},
    },
    std::convert::Infallible,
};

pub type Color = [u8; 3];

pub const BLACK: Color = [0, 0, 0];
pub const WHITE: Color = [255, 255, 255];
pub const GREEN: Color = [0, 255, 0];
pub const RED: Color = [255, 0, 0];

struct Canvas<'a> {
    image: &'a mut Image,
}

impl<'a> Canvas<'a> {
    fn new(image: &'a mut Image) -> Result<Self, ImageError> {
        image.format.ensure_format(PixelFormat::Rgb8)?;
        Ok(Self { image })
    }
}

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.image.size.x as u32, self.image.size.y as u32)
    }
}

impl DrawTarget for Canvas<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            set_pixel(self.image, point.x, point.y, [color.r(), color.g(), color.b()]);
        }
        Ok(())
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

fn rgb888(color: Color) -> Rgb888 {
    Rgb888::new(color[0], color[1], color[2])
}

fn point(p: Vec2<i32>) -> Point {
    Point::new(p.x, p.y)
}

fn set_pixel(image: &mut Image, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x as usize >= image.size.x || y as usize >= image.size.y {
        return;
    }
    let idx = (y as usize * image.size.x + x as usize) * 3;
    image.data[idx..idx + 3].copy_from_slice(&color);
}

/// Rectangle outline with the given stroke thickness.
pub fn rectangle(
    image: &mut Image,
    rect: Rect<i32>,
    color: Color,
    thickness: u32,
) -> Result<(), ImageError> {
    let mut canvas = Canvas::new(image)?;
    infallible(
        Rectangle::with_corners(point(rect.min()), point(rect.max()))
            .into_styled(PrimitiveStyle::with_stroke(rgb888(color), thickness))
            .draw(&mut canvas),
    );
    Ok(())
}

/// Fills `rect` with `color` mixed into the existing pixels: `alpha * color + (1 - alpha) * pixel`.
pub fn fill_rect_blended(
    image: &mut Image,
    rect: Rect<i32>,
    color: Color,
    alpha: f32,
) -> Result<(), ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    let alpha = alpha.clamp(0.0, 1.0);
    let min = rect.min();
    let max = rect.max();
    let x0 = min.x.max(0);
    let y0 = min.y.max(0);
    let x1 = max.x.min(image.size.x as i32 - 1);
    let y1 = max.y.min(image.size.y as i32 - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let idx = (y as usize * image.size.x + x as usize) * 3;
            for (channel, &c) in image.data[idx..idx + 3].iter_mut().zip(color.iter()) {
                let mixed = alpha * c as f32 + (1.0 - alpha) * *channel as f32;
                *channel = mixed.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(())
}

pub fn line(
    image: &mut Image,
    from: Vec2<i32>,
    to: Vec2<i32>,
    color: Color,
    thickness: u32,
) -> Result<(), ImageError> {
    let mut canvas = Canvas::new(image)?;
    infallible(
        Line::new(point(from), point(to))
            .into_styled(PrimitiveStyle::with_stroke(rgb888(color), thickness))
            .draw(&mut canvas),
    );
    Ok(())
}

pub fn filled_circle(
    image: &mut Image,
    center: Vec2<i32>,
    diameter: u32,
    color: Color,
) -> Result<(), ImageError> {
    let mut canvas = Canvas::new(image)?;
    infallible(
        Circle::with_center(point(center), diameter)
            .into_styled(PrimitiveStyle::with_fill(rgb888(color)))
            .draw(&mut canvas),
    );
    Ok(())
}

fn text_style(color: Color) -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(&FONT_10X20, rgb888(color))
}

/// Width of `content` and its height above the baseline, in pixels.
pub fn text_size(content: &str) -> Vec2<i32> {
    let bbox = Text::with_baseline(
        content,
        Point::zero(),
        text_style(WHITE),
        Baseline::Alphabetic,
    )
    .bounding_box();
    Vec2::new(bbox.size.width as i32, -bbox.top_left.y)
}

/// Draws `content` with the left end of its baseline at `origin`.
pub fn text(
    image: &mut Image,
    origin: Vec2<i32>,
    content: &str,
    color: Color,
) -> Result<(), ImageError> {
    let mut canvas = Canvas::new(image)?;
    infallible(
        Text::with_baseline(content, point(origin), text_style(color), Baseline::Alphabetic)
            .draw(&mut canvas),
    );
    Ok(())
}
