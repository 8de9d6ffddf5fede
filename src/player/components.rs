//! Player components: avatar state, collision box, and animation clips.
use bevy::prelude::*;

use crate::world::components::Aabb;

/// Player sprite sheet frame size (8 columns x 4 rows of 32x64 frames).
pub const PLAYER_FRAME_SIZE: Vec2 = Vec2::new(32.0, 64.0);

const SHEET_COLUMNS: usize = 8;
const WALK_FRAME_SECONDS: f32 = 0.1;

/// Cardinal facing of the avatar, matching the sprite sheet rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingDirection {
    #[default]
    Down,
    Up,
    Right,
    Left,
}

impl FacingDirection {
    /// Sprite sheet row order: down, up, right, left.
    fn sheet_row(self) -> usize {
        match self {
            Self::Down => 0,
            Self::Up => 1,
            Self::Right => 2,
            Self::Left => 3,
        }
    }
}

/// A named frame range within the player sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    pub name: &'static str,
    pub first: usize,
    pub last: usize,
    pub frame_seconds: f32,
}

/// Looping walk cycle for a facing (full sheet row at 10 fps).
pub fn walk_clip(facing: FacingDirection) -> AnimationClip {
    let first = facing.sheet_row() * SHEET_COLUMNS;
    AnimationClip {
        name: match facing {
            FacingDirection::Down => "walk-down",
            FacingDirection::Up => "walk-up",
            FacingDirection::Right => "walk-right",
            FacingDirection::Left => "walk-left",
        },
        first,
        last: first + SHEET_COLUMNS - 1,
        frame_seconds: WALK_FRAME_SECONDS,
    }
}

/// Idle pose for a facing (first frame of the row).
pub fn idle_clip(facing: FacingDirection) -> AnimationClip {
    let first = facing.sheet_row() * SHEET_COLUMNS;
    AnimationClip {
        name: match facing {
            FacingDirection::Down => "idle-down",
            FacingDirection::Up => "idle-up",
            FacingDirection::Right => "idle-right",
            FacingDirection::Left => "idle-left",
        },
        first,
        last: first,
        frame_seconds: 1.0,
    }
}

/// The player avatar's per-frame movement state.
#[derive(Component, Debug, Default)]
pub struct Player {
    pub velocity: Vec2,
    pub facing: FacingDirection,
    pub moving: bool,
}

impl Player {
    /// The clip the avatar should be showing right now.
    pub fn clip(&self) -> AnimationClip {
        if self.moving {
            walk_clip(self.facing)
        } else {
            idle_clip(self.facing)
        }
    }
}

/// Collision box anchored at the avatar's feet, expressed as an offset from
/// the sprite frame's top-left corner.
#[derive(Component, Debug)]
pub struct CollisionBox {
    pub size: Vec2,
    pub offset: Vec2,
}

impl CollisionBox {
    pub fn new(size: Vec2, offset: Vec2) -> Self {
        Self { size, offset }
    }

    /// Derives the world-space AABB for a sprite centered at `center`.
    pub fn player_aabb(&self, center: Vec2) -> Aabb {
        let top_left = center - PLAYER_FRAME_SIZE / 2.0 + self.offset;
        Aabb::new(top_left.x, top_left.y, self.size.x, self.size.y)
    }
}

/// Drives the frame stepping for the avatar's current clip.
#[derive(Component, Debug)]
pub struct PlayerAnimation {
    clip: AnimationClip,
    timer: Timer,
}

impl PlayerAnimation {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            timer: Timer::from_seconds(clip.frame_seconds, TimerMode::Repeating),
        }
    }

    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    /// Swaps the active clip. Returns true if the clip changed, in which
    /// case the caller should snap the sprite to the clip's first frame.
    pub fn set_clip(&mut self, clip: AnimationClip) -> bool {
        if clip.name == self.clip.name {
            return false;
        }
        self.clip = clip;
        self.timer = Timer::from_seconds(clip.frame_seconds, TimerMode::Repeating);
        true
    }

    /// Ticks the frame timer; returns the next atlas index when it fires.
    pub fn advance(&mut self, delta: std::time::Duration, current_index: usize) -> Option<usize> {
        self.timer.tick(delta);
        if !self.timer.just_finished() {
            return None;
        }
        let next = if current_index < self.clip.first || current_index >= self.clip.last {
            self.clip.first
        } else {
            current_index + 1
        };
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn clips_follow_sheet_rows() {
        assert_eq!(walk_clip(FacingDirection::Down).first, 0);
        assert_eq!(walk_clip(FacingDirection::Down).last, 7);
        assert_eq!(walk_clip(FacingDirection::Up).first, 8);
        assert_eq!(walk_clip(FacingDirection::Right).first, 16);
        assert_eq!(walk_clip(FacingDirection::Left).first, 24);

        let idle = idle_clip(FacingDirection::Right);
        assert_eq!((idle.first, idle.last), (16, 16));
        assert_eq!(idle.name, "idle-right");
    }

    #[test]
    fn clip_selection_tracks_movement_state() {
        let mut player = Player::default();
        assert_eq!(player.clip().name, "idle-down");

        player.moving = true;
        player.facing = FacingDirection::Left;
        assert_eq!(player.clip().name, "walk-left");
    }

    #[test]
    fn animation_wraps_within_clip_bounds() {
        let mut animation = PlayerAnimation::new(walk_clip(FacingDirection::Down));
        let frame = Duration::from_secs_f32(WALK_FRAME_SECONDS);

        assert_eq!(animation.advance(frame, 0), Some(1));
        assert_eq!(animation.advance(frame, 7), Some(0));
        // Out-of-range index (stale from another clip) snaps to the start.
        assert_eq!(animation.advance(frame, 20), Some(0));
        // Sub-frame delta does not step.
        assert_eq!(animation.advance(Duration::from_millis(10), 3), None);
    }

    #[test]
    fn collision_box_sits_at_the_feet() {
        let collision = CollisionBox::new(Vec2::new(20.0, 24.0), Vec2::new(6.0, 40.0));
        let aabb = collision.player_aabb(Vec2::new(100.0, 200.0));

        // Frame top-left is (84, 168); the box is inset by the offset.
        assert_eq!(aabb.x, 90.0);
        assert_eq!(aabb.y, 208.0);
        assert_eq!(aabb.width, 20.0);
        assert_eq!(aabb.height, 24.0);
    }
}
