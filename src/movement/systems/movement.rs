//! Movement domain: systems applying mover requests and per-frame updates.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{MoverAnimator, as_sink};
use crate::movement::{AccelerateRequest, JumpRequest, Mover};

pub(crate) fn apply_accelerate_requests(
    time: Res<Time>,
    mut requests: MessageReader<AccelerateRequest>,
    mut query: Query<(&Mover, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();

    for request in requests.read() {
        let Ok((mover, mut velocity)) = query.get_mut(request.entity) else {
            debug!("Accelerate request for non-mover {:?}", request.entity);
            continue;
        };

        mover.accelerate_in_direction(&mut *velocity, request.direction, dt);
    }
}

pub(crate) fn apply_jump_requests(
    mut requests: MessageReader<JumpRequest>,
    mut query: Query<(&mut Mover, &mut LinearVelocity, Option<&mut MoverAnimator>)>,
) {
    for request in requests.read() {
        let Ok((mut mover, mut velocity, mut animator)) = query.get_mut(request.entity) else {
            debug!("Jump request for non-mover {:?}", request.entity);
            continue;
        };

        if mover.jump(&mut *velocity, as_sink(animator.as_deref_mut())) {
            debug!("Jumped: mover={:?}, velocity={:?}", request.entity, velocity.0);
        }
    }
}

pub(crate) fn update_walking_flag(
    mut query: Query<(&Mover, &LinearVelocity, Option<&mut MoverAnimator>)>,
) {
    for (mover, velocity, mut animator) in &mut query {
        // Leave the animator untouched when the flag holds; tinting filters on `Changed`
        let walking = mover.is_walking(velocity);
        if animator.as_ref().is_some_and(|a| a.walking == walking) {
            continue;
        }

        mover.on_frame_update(velocity, as_sink(animator.as_deref_mut()));
    }
}
