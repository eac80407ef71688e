//! Range checks for designer tuning. Problems are reported, never rejected.

use crate::movement::MoverTuning;

/// A tuning value outside its recognized range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MoverTuning field '{}' is {} (expected {})",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a tuning value
macro_rules! check_range {
    ($warnings:expr, $tuning:expr, $field:ident, $ok:expr, $expected:expr) => {
        let value = $tuning.$field;
        if !$ok(value) {
            $warnings.push(ValidationWarning {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

/// Validate tuning ranges.
/// Returns a list of warnings, empty if every value is in range.
pub fn validate_tuning(tuning: &MoverTuning) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let positive = |v: f32| v > 0.0;
    let non_negative = |v: f32| v >= 0.0;

    check_range!(warnings, tuning, ground_acceleration, positive, "> 0");
    check_range!(warnings, tuning, air_acceleration, positive, "> 0");
    check_range!(warnings, tuning, jump_impulse, positive, "> 0");
    check_range!(warnings, tuning, max_speed, positive, "> 0");
    check_range!(warnings, tuning, min_walk_speed, non_negative, ">= 0");

    warnings
}
