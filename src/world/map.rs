//! Tiled JSON map loading: trigger zones and the player spawn point.
use std::{fmt, fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use crate::world::components::{Aabb, TriggerId, TriggerZone};

const TRIGGERS_LAYER: &str = "Triggers";
const SPAWN_LAYER: &str = "playerSpawn";

#[derive(Debug, Clone, Deserialize)]
struct TiledMap {
    #[serde(default)]
    layers: Vec<TiledLayer>,
}

#[derive(Debug, Clone, Deserialize)]
struct TiledLayer {
    #[serde(default)]
    name: String,
    #[serde(default)]
    objects: Vec<TiledObject>,
}

#[derive(Debug, Clone, Deserialize)]
struct TiledObject {
    #[serde(default)]
    name: String,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    #[serde(default)]
    properties: Vec<TiledProperty>,
}

#[derive(Debug, Clone, Deserialize)]
struct TiledProperty {
    name: String,
    #[serde(default)]
    value: serde_json::Value,
}

impl TiledProperty {
    /// Authored values are strings in practice; anything else is coerced.
    fn value_string(&self) -> String {
        match &self.value {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// Map content the scene needs: trigger zones in authoring order plus the
/// spawn point.
#[derive(Debug, Clone)]
pub struct LoadedMap {
    pub triggers: Vec<TriggerZone>,
    pub spawn: Vec2,
}

impl LoadedMap {
    /// An empty scene anchored at the fallback spawn, used when the map
    /// file cannot be loaded.
    pub fn empty(spawn: Vec2) -> Self {
        Self {
            triggers: Vec::new(),
            spawn,
        }
    }
}

#[derive(Debug)]
pub enum MapLoadError {
    Read { path: String, message: String },
    Parse { path: String, message: String },
}

impl fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, message } => write!(f, "failed to read {}: {}", path, message),
            Self::Parse { path, message } => write!(f, "failed to parse {}: {}", path, message),
        }
    }
}

impl std::error::Error for MapLoadError {}

/// Loads a Tiled JSON map from disk.
///
/// Only the `Triggers` and `playerSpawn` object layers are consumed; tile
/// layers belong to the renderer. A missing spawn layer falls back to
/// `fallback_spawn`; a missing trigger layer yields zero zones. Neither is
/// an error.
pub fn load_map(path: &Path, fallback_spawn: Vec2) -> Result<LoadedMap, MapLoadError> {
    let data = fs::read_to_string(path).map_err(|err| MapLoadError::Read {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    let map: TiledMap = serde_json::from_str(&data).map_err(|err| MapLoadError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    Ok(build_map(map, fallback_spawn))
}

fn build_map(map: TiledMap, fallback_spawn: Vec2) -> LoadedMap {
    let triggers = map
        .layers
        .iter()
        .find(|layer| layer.name == TRIGGERS_LAYER)
        .map(|layer| {
            layer
                .objects
                .iter()
                .enumerate()
                .map(|(index, object)| {
                    TriggerZone::new(
                        TriggerId::new(index as u32),
                        object.name.clone(),
                        Aabb::new(object.x, object.y, object.width, object.height),
                        object
                            .properties
                            .iter()
                            .map(|property| (property.name.clone(), property.value_string()))
                            .collect(),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    let spawn = map
        .layers
        .iter()
        .find(|layer| layer.name == SPAWN_LAYER)
        .and_then(|layer| layer.objects.first())
        .map(|object| Vec2::new(object.x, object.y))
        .unwrap_or(fallback_spawn);

    LoadedMap { triggers, spawn }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: Vec2 = Vec2::new(400.0, 1000.0);

    fn parse(json: &str) -> LoadedMap {
        let map: TiledMap = serde_json::from_str(json).expect("test map should parse");
        build_map(map, FALLBACK)
    }

    #[test]
    fn reads_triggers_and_spawn() {
        let map = parse(
            r#"{
                "layers": [
                    {
                        "name": "playerSpawn",
                        "objects": [{ "name": "spawn", "x": 128.0, "y": 256.0 }]
                    },
                    {
                        "name": "Triggers",
                        "objects": [
                            {
                                "name": "Bandstand",
                                "x": 32.0, "y": 64.0, "width": 96.0, "height": 48.0,
                                "properties": [
                                    { "name": "text", "value": "Brass bands played here." },
                                    { "name": "URL", "value": "http://example.org" }
                                ]
                            },
                            { "name": "Gates", "x": 0.0, "y": 0.0, "width": 16.0, "height": 16.0 }
                        ]
                    }
                ]
            }"#,
        );

        assert_eq!(map.spawn, Vec2::new(128.0, 256.0));
        assert_eq!(map.triggers.len(), 2);

        let bandstand = &map.triggers[0];
        assert_eq!(bandstand.id, TriggerId::new(0));
        assert_eq!(bandstand.name, "Bandstand");
        assert_eq!(bandstand.bounds, Aabb::new(32.0, 64.0, 96.0, 48.0));
        assert_eq!(bandstand.property("text"), Some("Brass bands played here."));
        assert_eq!(bandstand.property("url"), Some("http://example.org"));

        assert_eq!(map.triggers[1].id, TriggerId::new(1));
        assert_eq!(map.triggers[1].property("text"), None);
    }

    #[test]
    fn missing_spawn_layer_falls_back() {
        let map = parse(r#"{ "layers": [] }"#);
        assert_eq!(map.spawn, FALLBACK);
        assert!(map.triggers.is_empty());
    }

    #[test]
    fn empty_spawn_layer_falls_back() {
        let map = parse(r#"{ "layers": [{ "name": "playerSpawn", "objects": [] }] }"#);
        assert_eq!(map.spawn, FALLBACK);
    }

    #[test]
    fn non_string_property_values_are_coerced() {
        let map = parse(
            r#"{
                "layers": [{
                    "name": "Triggers",
                    "objects": [{
                        "name": "Odd",
                        "x": 0.0, "y": 0.0, "width": 8.0, "height": 8.0,
                        "properties": [{ "name": "text", "value": 42 }]
                    }]
                }]
            }"#,
        );
        assert_eq!(map.triggers[0].property("text"), Some("42"));
    }

    #[test]
    fn unreadable_file_is_a_read_error() {
        let err = load_map(Path::new("does/not/exist.json"), FALLBACK)
            .expect_err("missing file should error");
        assert!(matches!(err, MapLoadError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
