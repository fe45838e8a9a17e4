#![allow(dead_code)]

use {
    base::Vec3,
    gesture::{HAND_LANDMARK_COUNT, HandLandmarks, LandmarkIndex},
};

pub const WRIST: (f32, f32) = (0.5, 0.9);

/// Right hand seen in a mirrored frame, palm towards the camera.
///
/// `fingers` is thumb first; folded long fingers have their tips below the PIP joint,
/// a folded thumb has its tip right of the IP joint.
pub fn hand(fingers: [bool; 5]) -> HandLandmarks {
    let mut points = [Vec3::new(0.0, 0.0, 0.0); HAND_LANDMARK_COUNT];
    let mut set = |index: LandmarkIndex, x: f32, y: f32| {
        points[usize::from(index)] = Vec3::new(x, y, 0.0);
    };

    set(LandmarkIndex::Wrist, WRIST.0, WRIST.1);
    set(LandmarkIndex::ThumbCmc, 0.42, 0.85);
    set(LandmarkIndex::ThumbMcp, 0.36, 0.80);
    set(LandmarkIndex::ThumbIp, 0.32, 0.75);
    if fingers[0] {
        set(LandmarkIndex::ThumbTip, 0.28, 0.70);
    } else {
        set(LandmarkIndex::ThumbTip, 0.40, 0.72);
    }

    let long_fingers = [
        (LandmarkIndex::IndexMcp, 0.42),
        (LandmarkIndex::MiddleMcp, 0.50),
        (LandmarkIndex::RingMcp, 0.57),
        (LandmarkIndex::PinkyMcp, 0.63),
    ];
    for (i, &(mcp, x)) in long_fingers.iter().enumerate() {
        let base = usize::from(mcp);
        let tip_y = if fingers[i + 1] { 0.35 } else { 0.62 };
        for (offset, y) in [0.60, 0.50, 0.45, tip_y].into_iter().enumerate() {
            points[base + offset] = Vec3::new(x, y, 0.0);
        }
    }

    HandLandmarks::new(points)
}

/// Only the thumb extended, with the thumb tip at `degrees` from the wrist (image space).
pub fn thumb_at(degrees: f32) -> HandLandmarks {
    let mut hand = hand([true, false, false, false, false]);
    let radius = 0.2;
    let angle = degrees.to_radians();
    let tip = Vec3::new(
        WRIST.0 + radius * angle.cos(),
        WRIST.1 + radius * angle.sin(),
        0.0,
    );
    hand.points[usize::from(LandmarkIndex::ThumbTip)] = tip;
    // keep the IP joint to the right so the thumb still reads as extended
    hand.points[usize::from(LandmarkIndex::ThumbIp)] = Vec3::new(tip.x + 0.05, tip.y, 0.0);
    hand
}
