// src/ui/dialogue_panel/mod.rs
//
// Modal dialogue panel: displays trigger zone narration, an optional
// illustration, and an optional external link.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::DialoguePanelPlugin;
