//! Movement domain: demo room and player mover spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{MoverAnimator, StateTint};
use crate::movement::{GameLayer, Ground, Mover, MoverDefaults, ObjectLayer, Player, Wall};

/// World units are meters; the camera maps this many pixels onto one.
pub(crate) const PIXELS_PER_METER: f32 = 40.0;

const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 1.2);

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METER,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn spawn_player_mover(mut commands: Commands, defaults: Res<MoverDefaults>) {
    info!(
        "Spawning player mover: ground_accel={}, air_accel={}, jump={}, max_speed={}",
        defaults.tuning.ground_acceleration,
        defaults.tuning.air_acceleration,
        defaults.tuning.jump_impulse,
        defaults.tuning.max_speed
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            Mover::new(defaults.tuning.clone()),
            MoverAnimator::default(),
            StateTint::default(),
            ObjectLayer(GameLayer::Player),
        ),
        // Rendering
        Sprite {
            color: StateTint::default().idle,
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // (position, size, color)
    let grounds = [
        (Vec2::new(0.0, -5.0), Vec2::new(20.0, 1.0), ground_color),
        (Vec2::new(-6.0, -1.5), Vec2::new(4.0, 0.5), platform_color),
        (Vec2::new(6.0, 1.0), Vec2::new(4.0, 0.5), platform_color),
        (Vec2::new(0.0, 3.5), Vec2::new(3.0, 0.5), platform_color),
    ];

    for (position, size, color) in grounds {
        commands.spawn((
            Ground,
            ObjectLayer(GameLayer::Ground),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    let walls = [
        (Vec2::new(-10.5, 1.0), Vec2::new(1.0, 13.0)),
        (Vec2::new(10.5, 1.0), Vec2::new(1.0, 13.0)),
    ];

    for (position, size) in walls {
        commands.spawn((
            Wall,
            ObjectLayer(GameLayer::Wall),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
        ));
    }
}
