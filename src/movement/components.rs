//! Movement domain: components, collaborator capabilities and physics layers.

use std::collections::HashSet;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MoverTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameLayer {
    #[default]
    Default,
    /// Standing surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

/// Layer whose contacts count as standing on something.
pub const GROUND_LAYER: GameLayer = GameLayer::Ground;

/// Layer tag of the object owning a collider. Contact tracking compares it by value.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectLayer(pub GameLayer);

/// Marker for the keyboard-driven mover in the demo room
#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Velocity access on the rigid body a mover drives.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
}

impl PhysicsBody for LinearVelocity {
    fn velocity(&self) -> Vec2 {
        self.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }
}

/// Receiver for the two animation flags a mover drives.
pub trait AnimationSink {
    fn set_walking(&mut self, walking: bool);
    fn set_jumping(&mut self, jumping: bool);
}

/// Grounded-state change caused by a single mover operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundTransition {
    #[default]
    Unchanged,
    Landed,
    LeftGround,
}

/// Ground-layer objects currently touching the mover.
#[derive(Debug, Clone, Default)]
pub struct GroundContacts {
    contacts: HashSet<Entity>,
}

impl GroundContacts {
    /// Returns false if the handle was already tracked.
    pub fn insert(&mut self, handle: Entity) -> bool {
        self.contacts.insert(handle)
    }

    /// Returns false if the handle was not tracked.
    pub fn remove(&mut self, handle: Entity) -> bool {
        self.contacts.remove(&handle)
    }

    #[allow(dead_code)]
    pub fn contains(&self, handle: Entity) -> bool {
        self.contacts.contains(&handle)
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Platformer movement controller.
///
/// Holds the mover's tuning and the set of ground contacts. Velocity belongs to
/// the physics body and animation flags to an optional animator; both are
/// passed in by the caller on every operation.
#[derive(Component, Debug, Clone, Default)]
pub struct Mover {
    tuning: MoverTuning,
    contacts: GroundContacts,
}

impl Mover {
    pub fn new(tuning: MoverTuning) -> Self {
        Self {
            tuning,
            contacts: GroundContacts::default(),
        }
    }

    #[allow(dead_code)]
    pub fn tuning(&self) -> &MoverTuning {
        &self.tuning
    }

    pub fn contacts(&self) -> &GroundContacts {
        &self.contacts
    }

    pub fn is_grounded(&self) -> bool {
        !self.contacts.is_empty()
    }

    /// Host hook for a collision that just started.
    ///
    /// Any ground-layer contact, new or already tracked, clears the jumping flag.
    pub fn on_collision_begin(
        &mut self,
        other: Entity,
        layer: GameLayer,
        animator: Option<&mut dyn AnimationSink>,
    ) -> GroundTransition {
        if layer != GROUND_LAYER {
            return GroundTransition::Unchanged;
        }

        let was_grounded = self.is_grounded();
        self.contacts.insert(other);

        if let Some(animator) = animator {
            animator.set_jumping(false);
        }

        if !was_grounded && self.is_grounded() {
            GroundTransition::Landed
        } else {
            GroundTransition::Unchanged
        }
    }

    /// Host hook for a collision that just ended.
    ///
    /// Losing any ground-layer contact sets the jumping flag, even while other
    /// ground contacts remain.
    pub fn on_collision_end(
        &mut self,
        other: Entity,
        layer: GameLayer,
        animator: Option<&mut dyn AnimationSink>,
    ) -> GroundTransition {
        if layer != GROUND_LAYER {
            return GroundTransition::Unchanged;
        }

        let was_grounded = self.is_grounded();
        self.contacts.remove(other);

        if let Some(animator) = animator {
            animator.set_jumping(true);
        }

        if was_grounded && !self.is_grounded() {
            GroundTransition::LeftGround
        } else {
            GroundTransition::Unchanged
        }
    }

    /// Adds `direction * acceleration * dt` to the body's velocity and caps
    /// horizontal speed. The direction is applied as given, unnormalized.
    pub fn accelerate_in_direction(&self, body: &mut impl PhysicsBody, direction: Vec2, dt: f32) {
        let accel = self.tuning.acceleration(self.is_grounded());
        let mut velocity = body.velocity() + direction * accel * dt;
        velocity.x = clamp_speed(velocity.x, self.tuning.max_speed);
        body.set_velocity(velocity);
    }

    /// Applies the jump impulse if grounded. Returns whether the jump happened.
    ///
    /// A jump forgets every ground contact, not only the one jumped from.
    pub fn jump(
        &mut self,
        body: &mut impl PhysicsBody,
        animator: Option<&mut dyn AnimationSink>,
    ) -> bool {
        if !self.is_grounded() {
            return false;
        }

        body.set_velocity(body.velocity() + Vec2::new(0.0, self.tuning.jump_impulse));
        self.contacts.clear();

        if let Some(animator) = animator {
            animator.set_jumping(true);
        }

        true
    }

    pub fn is_walking(&self, body: &impl PhysicsBody) -> bool {
        body.velocity().x.abs() >= self.tuning.min_walk_speed
    }

    /// Per-frame host hook. Only the walking flag is refreshed here.
    pub fn on_frame_update(&self, body: &impl PhysicsBody, animator: Option<&mut dyn AnimationSink>) {
        if let Some(animator) = animator {
            animator.set_walking(self.is_walking(body));
        }
    }
}

/// Clamps to `[-max_speed, max_speed]`. Unlike `f32::clamp` this cannot panic
/// on a negative cap.
fn clamp_speed(speed: f32, max_speed: f32) -> f32 {
    if speed < -max_speed {
        -max_speed
    } else if speed > max_speed {
        max_speed
    } else {
        speed
    }
}
