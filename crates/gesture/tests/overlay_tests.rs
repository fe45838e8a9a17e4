use {
    base::{Rect, Vec2, Vec3},
    gesture::{
        HAND_LANDMARK_COUNT, HandLandmarks, LandmarkIndex, OverlayStyle,
        overlay::{self, LabelLayout},
    },
    image::{
        Image, PixelFormat,
        draw::{self, GREEN, RED},
    },
};

// all points at the center, index tip up-left, pinky tip down-right
fn small_hand() -> HandLandmarks {
    let mut points = [Vec3::new(0.5, 0.5, 0.0); HAND_LANDMARK_COUNT];
    points[usize::from(LandmarkIndex::IndexTip)] = Vec3::new(0.4, 0.4, 0.0);
    points[usize::from(LandmarkIndex::PinkyTip)] = Vec3::new(0.6, 0.6, 0.0);
    HandLandmarks::new(points)
}

fn gray(size: Vec2<usize>) -> Image {
    Image::new(size, vec![100; size.x * size.y * 3], PixelFormat::Rgb8)
}

#[test]
fn test_to_pixel_truncates() {
    let size = Vec2::new(100, 50);
    assert_eq!(overlay::to_pixel(Vec3::new(0.999, 0.5, 0.0), size), Vec2::new(99, 25));
    assert_eq!(overlay::to_pixel(Vec3::new(0.0, 0.0, 0.0), size), Vec2::new(0, 0));
}

#[test]
fn test_to_pixel_holds_stray_points_near_the_frame() {
    let size = Vec2::new(100, 50);
    assert_eq!(overlay::to_pixel(Vec3::new(1.2, -0.1, 0.0), size), Vec2::new(120, -5));
    assert_eq!(
        overlay::to_pixel(Vec3::new(f32::INFINITY, f32::NEG_INFINITY, 0.0), size),
        Vec2::new(200, -50)
    );
    assert_eq!(overlay::to_pixel(Vec3::new(-1.0e30, 1.0e30, 0.0), size), Vec2::new(-100, 100));
    assert_eq!(overlay::to_pixel(Vec3::new(f32::NAN, 0.5, 0.0), size), Vec2::new(0, 25));
}

#[test]
fn test_bounding_box() {
    let bbox = overlay::bounding_box(&small_hand(), Vec2::new(200, 200));
    assert_eq!(bbox, Rect::from_min_max(Vec2::new(80, 80), Vec2::new(120, 120)));
}

#[test]
fn test_bounding_box_scales_with_frame() {
    let bbox = overlay::bounding_box(&small_hand(), Vec2::new(400, 200));
    assert_eq!(bbox.min(), Vec2::new(160, 80));
    assert_eq!(bbox.max(), Vec2::new(240, 120));
}

#[test]
fn test_label_layout_centered_above_box() {
    let bbox = Rect::from_min_max(Vec2::new(100, 200), Vec2::new(300, 260));
    let text_size = draw::text_size("Hi");
    let LabelLayout {
        origin,
        background,
        ..
    } = overlay::label_layout(bbox, "Hi", 30);

    assert_eq!(origin, Vec2::new(100 + (200 - text_size.x) / 2, 170));
    assert_eq!(
        background,
        Rect::from_min_max(
            Vec2::new(origin.x - 10, 170 - text_size.y - 10),
            Vec2::new(origin.x + text_size.x + 10, 175),
        )
    );
}

#[test]
fn test_label_layout_floors_when_text_is_wider() {
    let bbox = Rect::from_min_max(Vec2::new(0, 50), Vec2::new(11, 60));
    assert_eq!(draw::text_size("Hi").x, 20);
    let layout = overlay::label_layout(bbox, "Hi", 30);
    // (11 - 20) / 2 rounded toward negative infinity
    assert_eq!(layout.origin.x, -5);
}

#[test]
fn test_annotate_draws_padded_box() {
    let image = gray(Vec2::new(200, 200));
    let hand = small_hand();
    let bbox = overlay::bounding_box(&hand, image.size);
    let style = OverlayStyle {
        draw_skeleton: false,
        ..OverlayStyle::default()
    };
    let annotated = overlay::annotate(&image, &hand, bbox, "", &style).unwrap();

    assert_eq!(annotated.pixel(60, 100), Some(GREEN));
    assert_eq!(annotated.pixel(100, 60), Some(GREEN));
    assert_eq!(annotated.pixel(100, 100), Some([100, 100, 100]));
    // input untouched
    assert_eq!(image.pixel(60, 100), Some([100, 100, 100]));
}

#[test]
fn test_annotate_label_background_is_blended() {
    let image = gray(Vec2::new(200, 200));
    let hand = small_hand();
    let bbox = overlay::bounding_box(&hand, image.size);
    let style = OverlayStyle {
        draw_skeleton: false,
        ..OverlayStyle::default()
    };
    let layout = overlay::label_layout(bbox, "Hi", style.label_lift);
    let corner = layout.background.min() + Vec2::new(1, 1);

    let annotated = overlay::annotate(&image, &hand, bbox, "Hi", &style).unwrap();
    assert_eq!(
        annotated.pixel(corner.x as usize, corner.y as usize),
        Some([40, 40, 40])
    );
    let white = annotated
        .data
        .chunks_exact(3)
        .filter(|p| *p == [255, 255, 255])
        .count();
    assert!(white > 0);

    let unlabeled = overlay::annotate(&image, &hand, bbox, "", &style).unwrap();
    assert_eq!(
        unlabeled.pixel(corner.x as usize, corner.y as usize),
        Some([100, 100, 100])
    );
}

#[test]
fn test_annotate_draws_skeleton() {
    let image = gray(Vec2::new(200, 200));
    let hand = small_hand();
    let bbox = overlay::bounding_box(&hand, image.size);
    let annotated =
        overlay::annotate(&image, &hand, bbox, "", &OverlayStyle::default()).unwrap();
    assert_eq!(annotated.pixel(100, 100), Some(RED));
    assert_eq!(annotated.pixel(80, 80), Some(RED));
}
