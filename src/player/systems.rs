//! Systems applying movement resolution and sprite animation to the avatar.
use bevy::prelude::*;

use crate::core::settings::GameSettings;
use crate::interaction::state::InteractionState;
use crate::player::components::{Player, PlayerAnimation};
use crate::player::movement::{resolve_movement, HeldDirections};
use crate::world::components::WorldPosition;

fn held_directions(keyboard: &ButtonInput<KeyCode>) -> HeldDirections {
    HeldDirections {
        left: keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA),
        right: keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD),
        up: keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW),
        down: keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS),
    }
}

/// Resolves held keys into velocity/facing and integrates the position.
/// A no-op while any modal is open.
pub fn drive_player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<GameSettings>,
    state: Res<InteractionState>,
    mut query: Query<(&mut WorldPosition, &mut Player)>,
) {
    if !state.is_closed() {
        return;
    }

    let sample = resolve_movement(held_directions(&keyboard), settings.player_speed);
    for (mut position, mut player) in query.iter_mut() {
        player.velocity = sample.velocity;
        if let Some(facing) = sample.facing {
            player.facing = facing;
        }
        player.moving = sample.moving();
        position.0 += sample.velocity * time.delta_secs();
    }
}

/// Steps the avatar's sprite frames. Frozen while a modal is open, exactly
/// like the movement update.
pub fn animate_player(
    time: Res<Time>,
    state: Res<InteractionState>,
    mut query: Query<(&Player, &mut PlayerAnimation, &mut Sprite)>,
) {
    if !state.is_closed() {
        return;
    }

    for (player, mut animation, mut sprite) in query.iter_mut() {
        let Some(atlas) = sprite.texture_atlas.as_mut() else {
            continue;
        };
        if animation.set_clip(player.clip()) {
            atlas.index = animation.clip().first;
            continue;
        }
        if let Some(next) = animation.advance(time.delta(), atlas.index) {
            atlas.index = next;
        }
    }
}
