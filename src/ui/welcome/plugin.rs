// src/ui/welcome/plugin.rs

use bevy::prelude::*;

use super::systems::{apply_welcome_commands, handle_welcome_clicks, setup_welcome};

pub struct WelcomePlugin;

impl Plugin for WelcomePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_welcome).add_systems(
            Update,
            (handle_welcome_clicks, apply_welcome_commands.after(handle_welcome_clicks)),
        );
    }
}
