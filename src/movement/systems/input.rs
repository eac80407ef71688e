//! Movement domain: keyboard sampling into mover requests for the demo room.

use bevy::prelude::*;

use crate::movement::{AccelerateRequest, JumpRequest, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    player_query: Query<Entity, With<Player>>,
    mut accelerate_requests: MessageWriter<AccelerateRequest>,
    mut jump_requests: MessageWriter<JumpRequest>,
) {
    let Ok(entity) = player_query.single() else {
        return;
    };

    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    if x != 0.0 {
        accelerate_requests.write(AccelerateRequest {
            entity,
            direction: Vec2::new(x, 0.0),
        });
    }

    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        jump_requests.write(JumpRequest { entity });
    }
}
