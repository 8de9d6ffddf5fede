//! Game settings loaded from `config/game.toml` with defensive defaults.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/game.toml";

const MIN_PLAYER_SPEED: f32 = 1.0;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawGameConfig {
    #[serde(default)]
    player: RawPlayerSection,
    #[serde(default)]
    prompt: RawPromptSection,
    #[serde(default)]
    scene: RawSceneSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPlayerSection {
    speed: f32,
    sprite_sheet: String,
    collision_size: [f32; 2],
    collision_offset: [f32; 2],
}

impl Default for RawPlayerSection {
    fn default() -> Self {
        Self {
            speed: 160.0,
            sprite_sheet: "sprites/player.png".to_string(),
            collision_size: [20.0, 24.0],
            collision_offset: [6.0, 40.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPromptSection {
    dwell_seconds: f32,
}

impl Default for RawPromptSection {
    fn default() -> Self {
        Self { dwell_seconds: 3.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSceneSection {
    map_path: String,
    fallback_spawn: [f32; 2],
    illustrations_dir: String,
    camera_lerp: f32,
}

impl Default for RawSceneSection {
    fn default() -> Self {
        Self {
            map_path: "assets/maps/gregson.json".to_string(),
            fallback_spawn: [400.0, 1000.0],
            illustrations_dir: "illustrations".to_string(),
            camera_lerp: 0.1,
        }
    }
}

/// Validated gameplay tuning shared across plugins.
#[derive(Resource, Debug, Clone)]
pub struct GameSettings {
    pub player_speed: f32,
    pub player_sprite_sheet: String,
    pub collision_size: Vec2,
    pub collision_offset: Vec2,
    pub prompt_dwell_seconds: f32,
    pub map_path: String,
    pub fallback_spawn: Vec2,
    pub illustrations_dir: String,
    pub camera_lerp: f32,
}

impl GameSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawGameConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawGameConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawGameConfig::default().into()
            }
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        RawGameConfig::default().into()
    }
}

impl From<RawGameConfig> for GameSettings {
    fn from(value: RawGameConfig) -> Self {
        let player = value.player;
        let prompt = value.prompt;
        let scene = value.scene;

        Self {
            player_speed: player.speed.max(MIN_PLAYER_SPEED),
            player_sprite_sheet: player.sprite_sheet,
            collision_size: Vec2::new(
                player.collision_size[0].max(1.0),
                player.collision_size[1].max(1.0),
            ),
            collision_offset: Vec2::new(player.collision_offset[0], player.collision_offset[1]),
            prompt_dwell_seconds: prompt.dwell_seconds.max(0.0),
            map_path: scene.map_path,
            fallback_spawn: Vec2::new(scene.fallback_spawn[0], scene.fallback_spawn[1]),
            illustrations_dir: scene.illustrations_dir,
            camera_lerp: scene.camera_lerp.clamp(0.0, 1.0),
        }
    }
}
