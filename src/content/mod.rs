//! Content domain: data-driven tuning loaded from `assets/data`.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

use loader::load_mover_tuning;
use validation::validate_tuning;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MoverDefaults;

/// Directory holding the RON data files.
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_mover_defaults);
    }
}

/// Load mover defaults at startup into the resource `MovementPlugin` owns.
/// Falls back to built-in tuning on failure.
pub fn load_mover_defaults(mut defaults: ResMut<MoverDefaults>) {
    let tuning = match load_mover_tuning(Path::new(DATA_DIR)) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using built-in mover tuning", e);
            return;
        }
    };

    for warning in validate_tuning(&tuning) {
        warn!("{}", warning);
    }

    info!("Loaded mover tuning: {:?}", tuning);
    defaults.tuning = tuning;
}
