//! Interaction module - trigger proximity tracking and the dialogue state machine.
pub mod events;
pub mod plugin;
pub mod state;
pub mod systems;

pub use plugin::InteractionPlugin;
