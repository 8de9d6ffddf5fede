//! Scene assembly and per-frame world upkeep.
use std::{fs, path::Path};

use bevy::prelude::*;

use crate::core::settings::GameSettings;
use crate::player::components::{CollisionBox, Player, PlayerAnimation, PLAYER_FRAME_SIZE};
use crate::world::components::{
    CameraFollow, IllustrationLibrary, TriggerRegistry, WorldPosition,
};
use crate::world::map::{load_map, LoadedMap};

const PLAYER_Z: f32 = 5.0;
const SHEET_COLUMNS: u32 = 8;
const SHEET_ROWS: u32 = 4;

/// Maps a world-space point (y down, map pixels) into render space.
pub fn world_to_render(point: Vec2, z: f32) -> Vec3 {
    Vec3::new(point.x, -point.y, z)
}

/// Loads the map, builds the trigger registry and illustration library, and
/// spawns the camera plus the player avatar at the spawn point.
pub fn setup_scene(
    mut commands: Commands,
    settings: Res<GameSettings>,
    asset_server: Res<AssetServer>,
    mut atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let map = match load_map(Path::new(&settings.map_path), settings.fallback_spawn) {
        Ok(map) => map,
        Err(err) => {
            warn!("{}. Starting with an empty scene.", err);
            LoadedMap::empty(settings.fallback_spawn)
        }
    };
    info!(
        "Scene loaded: {} trigger zones, spawn at ({:.0}, {:.0})",
        map.triggers.len(),
        map.spawn.x,
        map.spawn.y
    );
    commands.insert_resource(TriggerRegistry::from_zones(map.triggers));
    commands.insert_resource(load_illustrations(
        &settings.illustrations_dir,
        &asset_server,
    ));

    commands.spawn((
        Camera2d,
        CameraFollow::new(settings.camera_lerp),
        Transform::from_translation(world_to_render(map.spawn, 0.0)),
    ));

    let sheet = asset_server.load(settings.player_sprite_sheet.clone());
    let layout = atlas_layouts.add(TextureAtlasLayout::from_grid(
        PLAYER_FRAME_SIZE.as_uvec2(),
        SHEET_COLUMNS,
        SHEET_ROWS,
        None,
        None,
    ));
    let player = Player::default();
    let animation = PlayerAnimation::new(player.clip());

    commands.spawn((
        Sprite::from_atlas_image(
            sheet,
            TextureAtlas {
                layout,
                index: animation.clip().first,
            },
        ),
        Transform::from_translation(world_to_render(map.spawn, PLAYER_Z)),
        WorldPosition(map.spawn),
        player,
        CollisionBox::new(settings.collision_size, settings.collision_offset),
        animation,
    ));
}

/// Registers every image found in the illustrations directory by file name.
/// A missing directory just means no illustrated dialogues.
fn load_illustrations(dir: &str, asset_server: &AssetServer) -> IllustrationLibrary {
    let mut library = IllustrationLibrary::default();
    let disk_path = Path::new("assets").join(dir);
    let entries = match fs::read_dir(&disk_path) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(
                "No illustrations directory at {} ({})",
                disk_path.display(),
                err
            );
            return library;
        }
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let is_image = Path::new(&file_name)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("png") || ext.eq_ignore_ascii_case("jpg"))
            .unwrap_or(false);
        if !is_image {
            continue;
        }
        let handle = asset_server.load(format!("{}/{}", dir, file_name));
        library.insert(file_name, handle);
    }

    info!("Illustration library holds {} image(s)", library.len());
    library
}

/// Mirrors logical positions into render transforms (y axis flipped).
pub fn sync_render_transforms(
    mut query: Query<(&WorldPosition, &mut Transform), Changed<WorldPosition>>,
) {
    for (position, mut transform) in query.iter_mut() {
        transform.translation.x = position.0.x;
        transform.translation.y = -position.0.y;
    }
}

/// Eases the camera towards the player each frame.
pub fn camera_follow(
    player: Query<&WorldPosition, With<Player>>,
    mut cameras: Query<(&mut Transform, &CameraFollow), With<Camera2d>>,
) {
    let Ok(position) = player.single() else {
        return;
    };
    let target = world_to_render(position.0, 0.0);
    for (mut transform, follow) in cameras.iter_mut() {
        let current = transform.translation;
        transform.translation = current.lerp(Vec3::new(target.x, target.y, current.z), follow.lerp);
    }
}

/// Outlines every trigger zone, for map authoring sessions.
#[cfg(feature = "trigger_debug")]
pub fn draw_trigger_outlines(mut gizmos: Gizmos, registry: Res<TriggerRegistry>) {
    for zone in registry.iter() {
        let center = zone.bounds.center();
        gizmos.rect_2d(
            Isometry2d::from_translation(Vec2::new(center.x, -center.y)),
            zone.bounds.size(),
            Color::srgb(0.9, 0.6, 0.2),
        );
    }
}
