use gesture::{Gesture, GestureLabels};

#[test]
fn test_default_texts() {
    let labels = GestureLabels::default();
    assert_eq!(labels.text(Some(Gesture::Hi)), "Hi");
    assert_eq!(labels.text(Some(Gesture::ThumbsUp)), "Thumbs Up");
    assert_eq!(labels.text(Some(Gesture::ThumbsDown)), "Thumbs Down");
    assert_eq!(labels.text(Some(Gesture::LiveLong)), "Live Long");
    assert_eq!(labels.text(Some(Gesture::PointUp)), "Point Up");
    assert_eq!(labels.text(Some(Gesture::Shaka)), "Maara Jayega...");
    assert_eq!(labels.text(Some(Gesture::LoveYou)), "Nai");
    assert_eq!(labels.text(Some(Gesture::PinkyUp)), "Nature's Call !!!");
}

#[test]
fn test_unrecognized_is_empty() {
    assert_eq!(GestureLabels::default().text(None), "");
}

#[test]
fn test_custom_texts() {
    let labels = GestureLabels {
        shaka: "Hang Loose".to_string(),
        ..GestureLabels::default()
    };
    assert_eq!(labels.text(Some(Gesture::Shaka)), "Hang Loose");
    assert_eq!(labels.text(Some(Gesture::LoveYou)), "Nai");
}

#[test]
fn test_every_gesture_has_text() {
    let labels = GestureLabels::default();
    for gesture in Gesture::ALL {
        assert!(!labels.text(Some(gesture)).is_empty());
    }
}
