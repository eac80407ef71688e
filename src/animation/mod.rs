//! Animation flags driven by movers, and the sprite tint that displays them.

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::movement::AnimationSink;

/// Animation states a mover's flags resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
}

/// Boolean animation parameters written by a mover.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct MoverAnimator {
    pub walking: bool,
    pub jumping: bool,
}

impl MoverAnimator {
    /// Jumping takes priority over walking.
    pub fn state(&self) -> AnimationState {
        if self.jumping {
            AnimationState::Jump
        } else if self.walking {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        }
    }
}

impl AnimationSink for MoverAnimator {
    fn set_walking(&mut self, walking: bool) {
        self.walking = walking;
    }

    fn set_jumping(&mut self, jumping: bool) {
        self.jumping = jumping;
    }
}

pub(crate) fn as_sink(animator: Option<&mut MoverAnimator>) -> Option<&mut dyn AnimationSink> {
    animator.map(|animator| animator as &mut dyn AnimationSink)
}

/// Sprite colors per animation state.
#[derive(Component, Debug, Clone)]
pub struct StateTint {
    pub idle: Color,
    pub walk: Color,
    pub jump: Color,
}

impl Default for StateTint {
    fn default() -> Self {
        Self {
            idle: Color::srgb(0.9, 0.9, 0.9),
            walk: Color::srgb(0.85, 0.95, 0.85),
            jump: Color::srgb(0.95, 0.85, 0.85),
        }
    }
}

impl StateTint {
    pub fn color_for(&self, state: AnimationState) -> Color {
        match state {
            AnimationState::Idle => self.idle,
            AnimationState::Walk => self.walk,
            AnimationState::Jump => self.jump,
        }
    }
}

pub(crate) fn tint_by_state(
    mut query: Query<(&MoverAnimator, &StateTint, &mut Sprite), Changed<MoverAnimator>>,
) {
    for (animator, tint, mut sprite) in &mut query {
        sprite.color = tint.color_for(animator.state());
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, tint_by_state);
    }
}
