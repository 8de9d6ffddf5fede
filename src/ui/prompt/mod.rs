// src/ui/prompt/mod.rs
//
// Ambient prompt module: the transient instructional text at the bottom of
// the screen ("Arrow keys or WASD to move", "Press E to read").

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PromptPlugin;
