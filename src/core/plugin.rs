//! CorePlugin loads the shared game settings before any scene setup runs.
use bevy::prelude::*;

use crate::core::settings::GameSettings;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let settings = GameSettings::load_or_default();
        app.insert_resource(settings)
            .add_systems(Startup, log_settings);
    }
}

fn log_settings(settings: Res<GameSettings>) {
    info!(
        "CorePlugin initialised: player speed {:.0} px/s, map '{}', prompt dwell {:.1}s",
        settings.player_speed, settings.map_path, settings.prompt_dwell_seconds
    );
}
