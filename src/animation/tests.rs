//! Animation domain: tests for flag resolution.

use super::{AnimationState, MoverAnimator, StateTint};
use crate::movement::AnimationSink;

#[test]
fn test_default_animator_is_idle() {
    let animator = MoverAnimator::default();
    assert_eq!(animator.state(), AnimationState::Idle);
}

#[test]
fn test_jumping_overrides_walking() {
    let mut animator = MoverAnimator::default();
    animator.set_walking(true);
    assert_eq!(animator.state(), AnimationState::Walk);

    animator.set_jumping(true);
    assert_eq!(animator.state(), AnimationState::Jump);

    animator.set_jumping(false);
    assert_eq!(animator.state(), AnimationState::Walk);
}

#[test]
fn test_tint_matches_state() {
    let tint = StateTint::default();
    assert_eq!(tint.color_for(AnimationState::Idle), tint.idle);
    assert_eq!(tint.color_for(AnimationState::Walk), tint.walk);
    assert_eq!(tint.color_for(AnimationState::Jump), tint.jump);
}
