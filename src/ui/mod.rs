// src/ui/mod.rs
//
// UI module rendering the interaction layer's declarative commands:
// - Ambient prompt (bottom-center instructional text)
// - Dialogue panel (plain and illustrated layouts)
// - Welcome screen (full-screen introductory modal)

pub mod dialogue_panel;
pub mod link;
pub mod prompt;
pub mod welcome;

use bevy::prelude::*;

use crate::ui::link::{ActiveLinkOpener, ShellLinkOpener};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ActiveLinkOpener::new(Box::new(ShellLinkOpener)))
            .add_plugins((
                prompt::PromptPlugin,
                dialogue_panel::DialoguePanelPlugin,
                welcome::WelcomePlugin,
            ));
    }
}
