mod common;

use {
    common::{hand, thumb_at},
    gesture::{Orientation, orientation},
};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_angle_from_thumb_position() {
    assert!(close(Orientation::from_landmarks(&thumb_at(10.0)).angle_degrees, 10.0));
    assert!(close(Orientation::from_landmarks(&thumb_at(60.0)).angle_degrees, 60.0));
    assert!(close(Orientation::from_landmarks(&thumb_at(-120.0)).angle_degrees, -120.0));
}

#[test]
fn test_downward_only_above_45() {
    assert!(!orientation::is_downward_tilt(&thumb_at(10.0)));
    assert!(orientation::is_downward_tilt(&thumb_at(60.0)));
    assert!(!orientation::is_downward_tilt(&thumb_at(-90.0)));
}

#[test]
fn test_exactly_45_is_not_downward() {
    assert!(!Orientation { angle_degrees: 45.0 }.is_downward_tilt());
    assert!(Orientation { angle_degrees: 45.01 }.is_downward_tilt());
}

#[test]
fn test_open_hand_points_up() {
    // thumb tip above and left of the wrist
    let orientation = Orientation::from_landmarks(&hand([true; 5]));
    assert!(orientation.angle_degrees < 0.0);
    assert!(!orientation.is_downward_tilt());
}
