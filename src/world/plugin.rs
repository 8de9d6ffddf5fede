//! WorldPlugin coordinates map loading, scene spawning, and camera follow.
use bevy::prelude::*;

use crate::world::systems::{camera_follow, setup_scene, sync_render_transforms};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            (sync_render_transforms, camera_follow.after(sync_render_transforms)),
        );

        #[cfg(feature = "trigger_debug")]
        app.add_systems(Update, crate::world::systems::draw_trigger_outlines);
    }
}
