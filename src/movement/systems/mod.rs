//! Movement domain: system modules for mover updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::track_ground_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::{apply_accelerate_requests, apply_jump_requests, update_walking_flag};
