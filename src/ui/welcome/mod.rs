// src/ui/welcome/mod.rs
//
// Welcome overlay shown on startup. Blocks play until dismissed by a click
// anywhere outside its link.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WelcomePlugin;
