use base::{Vec2, Vec3};

#[test]
fn test_vec2_arithmetic() {
    let a = Vec2::new(3.0_f32, 4.0);
    let b = Vec2::new(1.0_f32, 1.0);
    assert_eq!(a - b, Vec2::new(2.0, 3.0));
    assert_eq!(a + b, Vec2::new(4.0, 5.0));
    assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
    assert!((a.length() - 5.0).abs() < 1e-6);
}

#[test]
fn test_angle_degrees_in_image_space() {
    assert!((Vec2::new(1.0_f32, 0.0).angle_degrees() - 0.0).abs() < 1e-4);
    // y grows downwards, so (0, 1) points straight down
    assert!((Vec2::new(0.0_f32, 1.0).angle_degrees() - 90.0).abs() < 1e-4);
    assert!((Vec2::new(-1.0_f32, 0.0).angle_degrees() - 180.0).abs() < 1e-4);
    assert!((Vec2::new(0.0_f32, -1.0).angle_degrees() + 90.0).abs() < 1e-4);
}

#[test]
fn test_vec3_xy_drops_depth() {
    let v = Vec3::new(0.25_f32, 0.5, -0.1);
    assert_eq!(v.xy(), Vec2::new(0.25, 0.5));
    assert_eq!(v - v, Vec3::zero());
}
