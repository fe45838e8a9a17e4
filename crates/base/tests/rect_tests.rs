use base::{Rect, Vec2};

#[test]
fn test_from_min_max() {
    let r = Rect::from_min_max(Vec2::new(10, 20), Vec2::new(40, 60));
    assert_eq!(r.origin, Vec2::new(10, 20));
    assert_eq!(r.size, Vec2::new(30, 40));
    assert_eq!(r.max(), Vec2::new(40, 60));
}

#[test]
fn test_inflate_grows_every_side() {
    let r = Rect::from_min_max(Vec2::new(10, 20), Vec2::new(40, 60)).inflate(20);
    assert_eq!(r.min(), Vec2::new(-10, 0));
    assert_eq!(r.max(), Vec2::new(60, 80));
}

#[test]
fn test_contains_point_is_half_open() {
    let r = Rect::new(Vec2::new(0, 0), Vec2::new(10, 10));
    assert!(r.contains_point(Vec2::new(0, 0)));
    assert!(r.contains_point(Vec2::new(9, 9)));
    assert!(!r.contains_point(Vec2::new(10, 5)));
    assert!(!r.contains_point(Vec2::new(-1, 5)));
}
