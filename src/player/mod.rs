//! Player module - movement resolution, facing, and sprite animation.
pub mod components;
pub mod movement;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
