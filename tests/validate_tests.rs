//! Validator tests - structural check, color balance, and the demo scenario

use pyraminx::core::{validate, ColorCounts, Cube, Face, ValidationError};
use pyraminx::types::{Color, FaceId};

#[test]
fn test_solved_cube_is_valid() {
    let cube = Cube::solved();
    assert_eq!(validate(&cube), Ok(()));

    let counts = ColorCounts::tally(&cube);
    for color in Color::ALL {
        assert_eq!(counts.count(color), 9);
    }
}

#[test]
fn test_single_recolor_breaks_balance_not_structure() {
    // Turn one Blue tile Red: Red 10, Blue 8.
    let mut cube = Cube::solved();
    assert!(cube.set_tile(FaceId::Right, 5, Color::Red));

    match validate(&cube) {
        Err(ValidationError::ColorImbalance { counts }) => {
            assert_eq!(counts.count(Color::Red), 10);
            assert_eq!(counts.count(Color::Blue), 8);
            assert_eq!(counts.count(Color::Green), 9);
            assert_eq!(counts.count(Color::Yellow), 9);
        }
        other => panic!("expected ColorImbalance, got {:?}", other),
    }
}

#[test]
fn test_malformed_base_face_reported_before_tally() {
    // A 5-tile Base face. The remaining tiles are also unbalanced, but the
    // structural failure must win.
    let cube = Cube::from_faces([
        Face::solid(Color::Red),
        Face::solid(Color::Blue),
        Face::solid(Color::Green),
        Face::from_tiles(vec![Color::Yellow; 5]),
    ]);

    assert_eq!(
        validate(&cube),
        Err(ValidationError::MalformedFace {
            face: FaceId::Base,
            found: 5,
        })
    );
}

#[test]
fn test_oversized_face_is_malformed() {
    let cube = Cube::from_faces([
        Face::from_tiles(vec![Color::Red; 10]),
        Face::solid(Color::Blue),
        Face::solid(Color::Green),
        Face::solid(Color::Yellow),
    ]);

    assert_eq!(
        validate(&cube),
        Err(ValidationError::MalformedFace {
            face: FaceId::Front,
            found: 10,
        })
    );
}

#[test]
fn test_first_malformed_face_in_canonical_order_wins() {
    let cube = Cube::from_faces([
        Face::solid(Color::Red),
        Face::from_tiles(vec![Color::Blue; 8]),
        Face::from_tiles(vec![Color::Green; 8]),
        Face::solid(Color::Yellow),
    ]);

    // Right precedes Left in canonical order.
    assert_eq!(
        validate(&cube),
        Err(ValidationError::MalformedFace {
            face: FaceId::Right,
            found: 8,
        })
    );
}

#[test]
fn test_balanced_scrambled_state_is_valid() {
    // Swap a Front tile with a Base tile: still 9 of each color, no face
    // monochrome requirement on legality.
    let mut cube = Cube::solved();
    cube.set_tile(FaceId::Front, 2, Color::Yellow);
    cube.set_tile(FaceId::Base, 7, Color::Red);

    assert_eq!(validate(&cube), Ok(()));
    assert!(!cube.is_solved());
}

#[test]
fn test_demo_scenario() {
    // Solved cube validates cleanly.
    let mut cube = Cube::solved();
    assert_eq!(validate(&cube), Ok(()));

    // Front becomes [R,R,R,R,R,R,R,R,B]: Red drops to 8, Blue rises to 10.
    assert!(cube.set_tile(FaceId::Front, 8, Color::Blue));

    match validate(&cube) {
        Err(ValidationError::ColorImbalance { counts }) => {
            assert_eq!(counts.count(Color::Red), 8);
            assert_eq!(counts.count(Color::Blue), 10);
            assert_eq!(counts.count(Color::Green), 9);
            assert_eq!(counts.count(Color::Yellow), 9);
        }
        other => panic!("expected ColorImbalance, got {:?}", other),
    }
}

#[test]
fn test_imbalance_message_carries_full_tally() {
    let mut cube = Cube::solved();
    cube.set_tile(FaceId::Front, 8, Color::Blue);

    let err = validate(&cube).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected 9 of each color, but found 8 red, 10 blue, 9 green, 9 yellow"
    );
}
