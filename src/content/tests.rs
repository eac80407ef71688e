//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::loader::{MOVER_TUNING_FILE, load_mover_tuning, parse_single};
use super::validation::validate_tuning;
use crate::movement::MoverTuning;

#[test]
fn test_parse_tuning() {
    let tuning: MoverTuning = parse_single(
        "inline",
        "(ground_acceleration: 40.0, air_acceleration: 5.0, jump_impulse: 12.0, \
         max_speed: 15.0, min_walk_speed: 0.0)",
    )
    .unwrap();

    assert_eq!(tuning.ground_acceleration, 40.0);
    assert_eq!(tuning.air_acceleration, 5.0);
    assert_eq!(tuning.jump_impulse, 12.0);
    assert_eq!(tuning.max_speed, 15.0);
    assert_eq!(tuning.min_walk_speed, 0.0);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<MoverTuning>("broken.ron", "(ground_acceleration: )").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_field_is_error() {
    let result = parse_single::<MoverTuning>("partial.ron", "(ground_acceleration: 1.0)");
    assert!(result.is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_mover_tuning(Path::new("does/not/exist")).unwrap_err();
    assert!(err.file.ends_with(MOVER_TUNING_FILE));
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_tuning_matches_defaults() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let tuning = load_mover_tuning(&base).unwrap();
    assert_eq!(tuning, MoverTuning::default());
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_validation_flags_out_of_range_values() {
    let tuning = MoverTuning {
        max_speed: 0.0,
        min_walk_speed: -1.0,
        ..MoverTuning::default()
    };

    let warnings = validate_tuning(&tuning);
    let fields: Vec<_> = warnings.iter().map(|w| w.field).collect();
    assert_eq!(fields, vec!["max_speed", "min_walk_speed"]);
}

#[test]
fn test_zero_walk_speed_is_valid() {
    let tuning = MoverTuning {
        min_walk_speed: 0.0,
        ..MoverTuning::default()
    };
    assert!(validate_tuning(&tuning).is_empty());
}
