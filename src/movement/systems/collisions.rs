//! Movement domain: ground contact tracking from collision events.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{MoverAnimator, as_sink};
use crate::movement::{GroundTransition, Mover, ObjectLayer};

pub(crate) fn track_ground_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    layer_query: Query<&ObjectLayer>,
    mut mover_query: Query<(&mut Mover, Option<&mut MoverAnimator>)>,
) {
    for event in collision_start_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (mover_entity, other) in pairs {
            let Ok((mut mover, mut animator)) = mover_query.get_mut(mover_entity) else {
                continue;
            };

            // Colliders without a layer tag sit on the default layer
            let layer = layer_query.get(other).map(|l| l.0).unwrap_or_default();
            let transition = mover.on_collision_begin(other, layer, as_sink(animator.as_deref_mut()));

            if transition == GroundTransition::Landed {
                debug!(
                    "Landed: mover={:?}, ground={:?}, contacts={}",
                    mover_entity,
                    other,
                    mover.contacts().len()
                );
            }
        }
    }

    for event in collision_end_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (mover_entity, other) in pairs {
            let Ok((mut mover, mut animator)) = mover_query.get_mut(mover_entity) else {
                continue;
            };

            let layer = layer_query.get(other).map(|l| l.0).unwrap_or_default();
            let transition = mover.on_collision_end(other, layer, as_sink(animator.as_deref_mut()));

            if transition == GroundTransition::LeftGround {
                debug!("Left ground: mover={:?}, last ground={:?}", mover_entity, other);
            }
        }
    }
}
