// src/ui/prompt/plugin.rs

use bevy::prelude::*;

use super::components::PromptSettings;
use super::systems::{apply_prompt_commands, setup_prompt};

pub struct PromptPlugin;

impl Plugin for PromptPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PromptSettings>()
            .add_systems(Startup, setup_prompt)
            .add_systems(Update, apply_prompt_commands);
    }
}
