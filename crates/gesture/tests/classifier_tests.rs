mod common;

use {
    common::{hand, thumb_at},
    gesture::{
        FingerStates, Gesture, Rule, RuleTable, Tilt,
        classifier::{self, DEFAULT_RULES},
        finger, orientation,
    },
};

fn classify_hand(skeleton: &gesture::HandLandmarks) -> Option<Gesture> {
    classifier::classify(
        finger::extract(skeleton),
        orientation::is_downward_tilt(skeleton),
    )
}

#[test]
fn test_open_hand_is_hi() {
    assert_eq!(classify_hand(&hand([true; 5])), Some(Gesture::Hi));
}

#[test]
fn test_fist() {
    assert_eq!(classify_hand(&hand([false; 5])), Some(Gesture::Fist));
}

#[test]
fn test_thumbs_up_and_down_by_angle() {
    assert_eq!(classify_hand(&thumb_at(10.0)), Some(Gesture::ThumbsUp));
    assert_eq!(classify_hand(&thumb_at(60.0)), Some(Gesture::ThumbsDown));
}

#[test]
fn test_table_entries() {
    let cases = [
        ([1, 1, 1, 0, 0], Gesture::LiveLong),
        ([0, 1, 1, 0, 0], Gesture::Victory),
        ([0, 0, 0, 1, 1], Gesture::Peace),
        ([0, 1, 0, 0, 0], Gesture::PointUp),
        ([1, 0, 0, 0, 1], Gesture::Shaka),
        ([1, 1, 0, 0, 1], Gesture::LoveYou),
        ([0, 0, 0, 0, 1], Gesture::PinkyUp),
    ];
    for (bits, gesture) in cases {
        let fingers = FingerStates::from_bits(bits);
        assert_eq!(classifier::classify(fingers, false), Some(gesture));
        // tilt only matters for the lone thumb
        assert_eq!(classifier::classify(fingers, true), Some(gesture));
    }
}

#[test]
fn test_unknown_vectors_are_unrecognized() {
    for bits in [[0, 1, 1, 1, 0], [0, 1, 1, 1, 1], [1, 0, 1, 0, 1], [0, 0, 1, 0, 0]] {
        assert_eq!(
            classifier::classify(FingerStates::from_bits(bits), false),
            None
        );
    }
}

#[test]
fn test_known_vector_count() {
    let recognized = (0..32u8)
        .map(|bits| FingerStates::new(std::array::from_fn(|i| bits & (1 << i) != 0)))
        .filter(|&fingers| classifier::classify(fingers, false).is_some())
        .count();
    // 11 rules, two of which share the thumb-only vector
    assert_eq!(recognized, 10);
}

#[test]
fn test_default_table_order() {
    let table = RuleTable::default();
    assert_eq!(table.rules(), &DEFAULT_RULES[..]);
    assert_eq!(table.rules()[0].gesture, Gesture::Hi);
    assert_eq!(table.rules()[1].tilt, Tilt::Upright);
    assert_eq!(table.rules()[2].tilt, Tilt::Downward);
}

static THUMB_ANY_FIRST: [Rule; 2] = [
    Rule::new([1, 0, 0, 0, 0], Tilt::Any, Gesture::ThumbsUp),
    Rule::new([1, 0, 0, 0, 0], Tilt::Downward, Gesture::ThumbsDown),
];

static THUMB_DOWNWARD_FIRST: [Rule; 2] = [
    Rule::new([1, 0, 0, 0, 0], Tilt::Downward, Gesture::ThumbsDown),
    Rule::new([1, 0, 0, 0, 0], Tilt::Any, Gesture::ThumbsUp),
];

#[test]
fn test_first_match_wins() {
    let thumb = FingerStates::from_bits([1, 0, 0, 0, 0]);

    // both rules match a downward thumb; the earlier one decides
    let any_first = RuleTable::new(&THUMB_ANY_FIRST);
    assert_eq!(any_first.classify(thumb, true), Some(Gesture::ThumbsUp));
    assert_eq!(any_first.classify(thumb, false), Some(Gesture::ThumbsUp));

    let downward_first = RuleTable::new(&THUMB_DOWNWARD_FIRST);
    assert_eq!(downward_first.classify(thumb, true), Some(Gesture::ThumbsDown));
    assert_eq!(downward_first.classify(thumb, false), Some(Gesture::ThumbsUp));
}

#[test]
fn test_same_skeleton_same_label() {
    let skeleton = thumb_at(30.0);
    assert_eq!(classify_hand(&skeleton), classify_hand(&skeleton));
}
