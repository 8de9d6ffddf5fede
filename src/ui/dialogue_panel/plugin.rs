// src/ui/dialogue_panel/plugin.rs

use bevy::prelude::*;

use super::components::{DialoguePanelSettings, DialoguePanelTracker};
use super::systems::{apply_dialogue_commands, handle_link_buttons};

pub struct DialoguePanelPlugin;

impl Plugin for DialoguePanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialoguePanelTracker>()
            .init_resource::<DialoguePanelSettings>()
            .add_systems(Update, (apply_dialogue_commands, handle_link_buttons));
    }
}
