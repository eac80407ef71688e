//! Movement domain: mover plugin wiring and public exports.

mod components;
mod dev;
mod events;
mod resources;
mod systems;


pub use components::{
    AnimationSink, GROUND_LAYER, GameLayer, Ground, GroundContacts, GroundTransition, Mover,
    ObjectLayer, PhysicsBody, Player, Wall,
};
pub use events::{AccelerateRequest, JumpRequest};
pub use resources::{MoverDefaults, MoverTuning};

use bevy::prelude::*;

use crate::content::load_mover_defaults;
use crate::movement::dev::{setup_camera, spawn_player_mover, spawn_test_room};
use crate::movement::systems::{
    apply_accelerate_requests, apply_jump_requests, read_input, track_ground_contacts,
    update_walking_flag,
};

/// Mover systems: collision hooks, gameplay requests and the per-frame update.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoverDefaults>()
            .add_message::<AccelerateRequest>()
            .add_message::<JumpRequest>()
            .add_systems(
                Update,
                (
                    track_ground_contacts,
                    apply_accelerate_requests,
                    apply_jump_requests,
                    update_walking_flag,
                )
                    .chain(),
            );
    }
}

/// Demo room with a keyboard-driven mover.
pub struct DemoRoomPlugin;

impl Plugin for DemoRoomPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                setup_camera,
                spawn_test_room,
                spawn_player_mover.after(load_mover_defaults),
            ),
        )
        .add_systems(Update, read_input.before(apply_accelerate_requests));
    }
}
