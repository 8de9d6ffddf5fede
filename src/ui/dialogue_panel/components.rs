// src/ui/dialogue_panel/components.rs
//
// Components and resources for the dialogue panel.

use bevy::prelude::*;

/// Marker on the full-width wrapper that centers the dialogue panel.
#[derive(Component)]
pub struct DialoguePanelRoot;

/// Button that opens an external link when pressed.
#[derive(Component, Debug)]
pub struct DialogueLinkButton {
    pub url: String,
}

/// Resource tracking the currently active dialogue panel.
///
/// Ensures only one panel is displayed at a time.
#[derive(Resource, Debug, Default)]
pub struct DialoguePanelTracker {
    /// The currently active panel entity, if any.
    pub active_panel: Option<Entity>,
}

/// Resource containing layout settings for the dialogue panel.
#[derive(Resource, Debug)]
pub struct DialoguePanelSettings {
    /// Panel width (pixels).
    pub panel_width: f32,

    /// Minimum panel height (pixels).
    pub panel_min_height: f32,

    /// Padding inside panel (pixels).
    pub padding: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Offset from bottom edge of screen (pixels).
    pub bottom_offset: f32,

    /// Width reserved for the illustration column (pixels).
    pub illustration_width: f32,

    /// Font size for the zone caption above an illustration (points).
    pub caption_font_size: f32,

    /// Font size for narration text (points).
    pub text_font_size: f32,

    /// Font size for the link line (points).
    pub link_font_size: f32,

    /// Font size for the close hint (points).
    pub hint_font_size: f32,
}

impl Default for DialoguePanelSettings {
    fn default() -> Self {
        Self {
            panel_width: 700.0,
            panel_min_height: 150.0,
            padding: 16.0,
            border_width: 3.0,
            bottom_offset: 25.0,
            illustration_width: 200.0,
            caption_font_size: 18.0,
            text_font_size: 16.0,
            link_font_size: 14.0,
            hint_font_size: 12.0,
        }
    }
}
