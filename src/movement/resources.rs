//! Movement domain: tuning values and spawn defaults.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Designer-set tuning for a single mover. Read-only once the mover is spawned.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MoverTuning {
    /// How fast speed builds up while standing on the ground.
    pub ground_acceleration: f32,
    /// How fast speed builds up while airborne.
    pub air_acceleration: f32,
    /// Upward velocity added by a single jump.
    pub jump_impulse: f32,
    /// Cap on horizontal speed in either direction.
    pub max_speed: f32,
    /// Horizontal speed at or above which the mover counts as walking.
    pub min_walk_speed: f32,
}

impl Default for MoverTuning {
    fn default() -> Self {
        Self {
            ground_acceleration: 50.0,
            air_acceleration: 10.0,
            jump_impulse: 10.0,
            max_speed: 20.0,
            min_walk_speed: 0.1,
        }
    }
}

impl MoverTuning {
    /// Acceleration for the current grounded state.
    pub fn acceleration(&self, grounded: bool) -> f32 {
        if grounded {
            self.ground_acceleration
        } else {
            self.air_acceleration
        }
    }
}

/// Tuning handed to newly spawned movers. Populated from `assets/data/mover.ron`.
#[derive(Resource, Debug, Clone, Default)]
pub struct MoverDefaults {
    pub tuning: MoverTuning,
}
