// tests/plateau_bounds.rs
use glam::IVec2;
use plateau_rover::{Plateau, ValidationError};

#[test]
fn test_valid_bounds_echo() {
    let plateau = Plateau::from_upper_bound("6 6").unwrap();
    assert_eq!(plateau.bounds(), (IVec2::ZERO, IVec2::new(6, 6)));
    assert_eq!(plateau.bottom_left(), IVec2::ZERO);
    assert_eq!(plateau.upper_right(), IVec2::new(6, 6));
}

#[test]
fn test_bounds_trim_surrounding_whitespace() {
    let plateau = Plateau::from_upper_bound("  5 5\n").unwrap();
    assert_eq!(plateau.upper_right(), IVec2::new(5, 5));
}

#[test]
fn test_zero_area_plateau_is_valid() {
    // A 1x1 plateau: the origin is its only cell.
    let plateau = Plateau::from_upper_bound("0 0").unwrap();
    assert!(plateau.contains(IVec2::ZERO));
    assert!(!plateau.contains(IVec2::X));
}

#[test]
fn test_wrong_token_count_rejected() {
    assert!(Plateau::from_upper_bound("5 5 3").is_err());
    assert!(Plateau::from_upper_bound("5").is_err());
    assert!(Plateau::from_upper_bound("").is_err());
    // Double space yields an empty middle token.
    assert!(Plateau::from_upper_bound("5  5").is_err());
}

#[test]
fn test_non_integer_tokens_rejected() {
    assert!(Plateau::from_upper_bound("S a").is_err());
    assert!(Plateau::from_upper_bound("5 b").is_err());
}

#[test]
fn test_negative_bounds_rejected() {
    let err = Plateau::from_upper_bound("-1 -1").unwrap_err();
    assert_eq!(
        err,
        ValidationError::PlateauBounds {
            input: "-1 -1".to_owned()
        }
    );
    assert!(Plateau::from_upper_bound("5 -1").is_err());
}

#[test]
fn test_error_message_names_the_expected_format() {
    let err = Plateau::from_upper_bound("nope").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("nope"));
    assert!(message.contains("5 5"), "message should carry an example");
}

#[test]
fn test_containment_is_inclusive() {
    let plateau = Plateau::from_upper_bound("5 5").unwrap();
    assert!(plateau.contains(IVec2::new(0, 0)));
    assert!(plateau.contains(IVec2::new(5, 5)));
    assert!(plateau.contains(IVec2::new(0, 5)));
    assert!(!plateau.contains(IVec2::new(6, 5)));
    assert!(!plateau.contains(IVec2::new(-1, 0)));
}
