//! Frame annotation: hand skeleton, bounding box and gesture label.

use {
    crate::*,
    base::{Rect, Vec2, Vec3},
    image::{
        Image, ImageError,
        draw::{self, BLACK, Color, GREEN, RED, WHITE},
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub box_color: Color,
    /// Extra space around the landmarks on every side, in pixels.
    pub box_padding: i32,
    pub box_thickness: u32,
    pub text_color: Color,
    pub background_color: Color,
    /// Weight of the background color when blended over the frame.
    pub background_alpha: f32,
    /// Distance from the top of the unpadded box to the label baseline.
    pub label_lift: i32,
    pub draw_skeleton: bool,
    pub landmark_color: Color,
    pub landmark_diameter: u32,
    pub connection_color: Color,
    pub connection_thickness: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            box_color: GREEN,
            box_padding: 20,
            box_thickness: 2,
            text_color: WHITE,
            background_color: BLACK,
            background_alpha: 0.6,
            label_lift: 30,
            draw_skeleton: true,
            landmark_color: RED,
            landmark_diameter: 5,
            connection_color: WHITE,
            connection_thickness: 2,
        }
    }
}

/// Pixel position of a normalized point, truncated toward zero.
///
/// Each coordinate is held within one frame extent beyond either edge, so stray points
/// stay off-screen without overflowing later box and line arithmetic. NaN maps to 0.
pub fn to_pixel(point: Vec3<f32>, size: Vec2<usize>) -> Vec2<i32> {
    Vec2::new(to_pixel_axis(point.x, size.x), to_pixel_axis(point.y, size.y))
}

fn to_pixel_axis(value: f32, extent: usize) -> i32 {
    let extent = extent as f32;
    (value * extent).clamp(-extent, 2.0 * extent) as i32
}

/// Smallest pixel rectangle holding all landmarks.
///
/// Accumulation starts from min `(width, height)` and max `(0, 0)`, so the result never
/// extends past the frame's far edges unless a landmark does.
pub fn bounding_box(hand: &HandLandmarks, size: Vec2<usize>) -> Rect<i32> {
    let mut min = Vec2::new(size.x as i32, size.y as i32);
    let mut max = Vec2::new(0, 0);
    for &point in hand.points.iter() {
        let p = to_pixel(point, size);
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Rect::from_min_max(min, max)
}

/// Where a label goes relative to the hand's (unpadded) bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelLayout {
    /// Left end of the text baseline.
    pub origin: Vec2<i32>,
    pub text_size: Vec2<i32>,
    pub background: Rect<i32>,
}

/// Centers the text horizontally over `bbox` with its baseline `lift` pixels above it.
pub fn label_layout(bbox: Rect<i32>, text: &str, lift: i32) -> LabelLayout {
    let text_size = draw::text_size(text);
    let min = bbox.min();
    let max = bbox.max();
    let origin = Vec2::new(
        min.x + (max.x - min.x - text_size.x).div_euclid(2),
        min.y - lift,
    );
    let background = Rect::from_min_max(
        Vec2::new(origin.x - 10, origin.y - text_size.y - 10),
        Vec2::new(origin.x + text_size.x + 10, origin.y + 5),
    );
    LabelLayout {
        origin,
        text_size,
        background,
    }
}

fn draw_skeleton(
    image: &mut Image,
    hand: &HandLandmarks,
    style: &OverlayStyle,
) -> Result<(), ImageError> {
    let size = image.size;
    for (from, to) in HAND_CONNECTIONS {
        draw::line(
            image,
            to_pixel(hand.point(from), size),
            to_pixel(hand.point(to), size),
            style.connection_color,
            style.connection_thickness,
        )?;
    }
    for &point in hand.points.iter() {
        draw::filled_circle(
            image,
            to_pixel(point, size),
            style.landmark_diameter,
            style.landmark_color,
        )?;
    }
    Ok(())
}

/// Copy of `image` with the skeleton, the padded box around `bbox` and, unless `label`
/// is empty, the label on a blended background.
pub fn annotate(
    image: &Image,
    hand: &HandLandmarks,
    bbox: Rect<i32>,
    label: &str,
    style: &OverlayStyle,
) -> Result<Image, ImageError> {
    let mut annotated = image.clone();

    if style.draw_skeleton {
        draw_skeleton(&mut annotated, hand, style)?;
    }

    draw::rectangle(
        &mut annotated,
        bbox.inflate(style.box_padding),
        style.box_color,
        style.box_thickness,
    )?;

    if !label.is_empty() {
        let layout = label_layout(bbox, label, style.label_lift);
        draw::fill_rect_blended(
            &mut annotated,
            layout.background,
            style.background_color,
            style.background_alpha,
        )?;
        draw::text(&mut annotated, layout.origin, label, style.text_color)?;
    }

    Ok(annotated)
}
