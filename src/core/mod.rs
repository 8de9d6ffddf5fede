//! Core module hosting game configuration loading.
pub mod plugin;
pub mod settings;

pub use plugin::CorePlugin;
