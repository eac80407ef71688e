//! Movement domain: requests gameplay code sends to movers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Ask a mover to accelerate along `direction` for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct AccelerateRequest {
    pub entity: Entity,
    pub direction: Vec2,
}

impl Message for AccelerateRequest {}

/// Ask a mover to jump. Ignored while airborne.
#[derive(Debug, Clone, Copy)]
pub struct JumpRequest {
    pub entity: Entity,
}

impl Message for JumpRequest {}
