use bevy::prelude::*;

mod core;
mod interaction;
mod player;
mod ui;
mod world;

use crate::{
    core::CorePlugin, interaction::InteractionPlugin, player::PlayerPlugin, ui::UiPlugin,
    world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(ImagePlugin::default_nearest()),
            CorePlugin,
            WorldPlugin,
            PlayerPlugin,
            InteractionPlugin,
            UiPlugin,
        ))
        .run();
}
