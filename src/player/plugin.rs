//! Player plugin wiring movement and animation systems.
use bevy::prelude::*;

use crate::player::systems::{animate_player, drive_player_movement};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (drive_player_movement, animate_player.after(drive_player_movement)),
        );
    }
}
