// src/ui/prompt/components.rs

use bevy::prelude::*;

/// Marker for the full-width container that centers the prompt strip.
#[derive(Component)]
pub struct PromptRoot;

/// Marker for the text node inside the prompt strip.
#[derive(Component)]
pub struct PromptText;

/// Layout knobs for the prompt strip.
#[derive(Resource)]
pub struct PromptSettings {
    pub font_size: f32,
    pub bottom_offset: f32,
    pub padding_x: f32,
    pub padding_y: f32,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            bottom_offset: 50.0,
            padding_x: 10.0,
            padding_y: 5.0,
        }
    }
}
