//! World module housing the trigger zone model, map loading, and scene assembly.
pub mod components;
pub mod map;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
