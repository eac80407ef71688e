//! Debug readout of the player mover's state (dev-tools only).
//!
//! Shows grounded, walking and jumping flags plus the ground contact count.
//! F3 toggles visibility.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::MoverAnimator;
use crate::movement::{Mover, Player};

const READOUT_PADDING: f32 = 16.0;

/// Marker for the debug readout text
#[derive(Component)]
pub struct MoverReadout;

pub(crate) fn spawn_mover_readout(mut commands: Commands) {
    commands.spawn((
        MoverReadout,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(READOUT_PADDING),
            top: Val::Px(READOUT_PADDING),
            ..default()
        },
    ));
}

/// Single-line summary of a mover's state.
pub(crate) fn format_readout(
    mover: &Mover,
    velocity: &LinearVelocity,
    animator: Option<&MoverAnimator>,
) -> String {
    let jumping = animator.map(|a| a.jumping.to_string());
    format!(
        "grounded={} walking={} jumping={} contacts={} velocity=({:.2}, {:.2})",
        mover.is_grounded(),
        mover.is_walking(velocity),
        jumping.as_deref().unwrap_or("-"),
        mover.contacts().len(),
        velocity.x,
        velocity.y
    )
}

pub(crate) fn update_mover_readout(
    player_query: Query<(&Mover, &LinearVelocity, Option<&MoverAnimator>), With<Player>>,
    mut readout_query: Query<&mut Text, With<MoverReadout>>,
) {
    let Ok((mover, velocity, animator)) = player_query.single() else {
        return;
    };

    for mut text in &mut readout_query {
        text.0 = format_readout(mover, velocity, animator);
    }
}

pub(crate) fn toggle_mover_readout(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut readout_query: Query<&mut Visibility, With<MoverReadout>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for mut visibility in &mut readout_query {
        visibility.toggle_visible_hidden();
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_mover_readout)
            .add_systems(Update, (toggle_mover_readout, update_mover_readout));
    }
}
