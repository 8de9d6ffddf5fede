//! Trigger zones, the registry that owns them, and world-space positioning.
use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;

/// Axis-aligned bounding box in world pixel coordinates.
///
/// The world uses the map's coordinate convention: origin at the top-left,
/// y growing downwards. `x`/`y` name the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Rectangle intersection. Touching edges count as overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }
}

/// Identifier assigned to trigger zones in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerId(u32);

impl TriggerId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone-{:02}", self.0)
    }
}

/// An authored rectangular map region tied to narrative content.
///
/// Immutable after load; owned by the [`TriggerRegistry`] for the scene's
/// lifetime.
#[derive(Debug, Clone)]
pub struct TriggerZone {
    pub id: TriggerId,
    pub name: String,
    pub bounds: Aabb,
    properties: Vec<(String, String)>,
}

impl TriggerZone {
    pub fn new(
        id: TriggerId,
        name: impl Into<String>,
        bounds: Aabb,
        properties: Vec<(String, String)>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            bounds,
            properties,
        }
    }

    /// Looks up an authored property, ignoring key casing (`text` and `Text`
    /// are both in circulation in the map files). First authored match wins.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }
}

/// Resource owning every trigger zone, in authoring (registration) order.
#[derive(Resource, Debug, Default)]
pub struct TriggerRegistry {
    zones: Vec<TriggerZone>,
}

impl TriggerRegistry {
    /// Zone ids must equal their position in `zones`; [`Self::get`] indexes
    /// by id. The map loader assigns ids in registration order, which
    /// satisfies this by construction.
    pub fn from_zones(zones: Vec<TriggerZone>) -> Self {
        debug_assert!(
            zones
                .iter()
                .enumerate()
                .all(|(index, zone)| zone.id.index() == index),
            "trigger ids must match registration order"
        );
        Self { zones }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, id: TriggerId) -> Option<&TriggerZone> {
        self.zones.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TriggerZone> {
        self.zones.iter()
    }

    /// Returns the zone overlapping `probe`, if any.
    ///
    /// When several zones overlap at once the last-registered one wins.
    /// Well-formed maps do not overlap zones, but the tie-break is
    /// observable at zone corners and is kept deterministic.
    pub fn overlapping(&self, probe: &Aabb) -> Option<TriggerId> {
        let mut hit = None;
        for zone in &self.zones {
            if zone.bounds.intersects(probe) {
                hit = Some(zone.id);
            }
        }
        hit
    }
}

/// Logical position in map pixel space (y down), the simulation's source of
/// truth. A sync system mirrors it into the render `Transform`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WorldPosition(pub Vec2);

/// Marker for the scene camera, storing the follow smoothing factor.
#[derive(Component, Debug)]
pub struct CameraFollow {
    pub lerp: f32,
}

impl CameraFollow {
    pub fn new(lerp: f32) -> Self {
        Self { lerp }
    }
}

/// Resource mapping illustration file names to loaded image handles.
///
/// A trigger's `image` property is resolved against this library; an
/// unknown name simply falls back to the plain dialogue layout.
#[derive(Resource, Debug, Default)]
pub struct IllustrationLibrary {
    by_name: HashMap<String, Handle<Image>>,
}

impl IllustrationLibrary {
    pub fn insert(&mut self, name: impl Into<String>, handle: Handle<Image>) {
        self.by_name.insert(name.into().to_ascii_lowercase(), handle);
    }

    pub fn resolve(&self, name: &str) -> Option<Handle<Image>> {
        self.by_name.get(&name.to_ascii_lowercase()).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: u32, bounds: Aabb) -> TriggerZone {
        TriggerZone::new(TriggerId::new(id), format!("zone {}", id), bounds, Vec::new())
    }

    #[test]
    fn aabb_overlap_matches_reference_test() {
        let base = Aabb::new(0.0, 0.0, 10.0, 10.0);

        assert!(base.intersects(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(base.intersects(&Aabb::new(-5.0, -5.0, 10.0, 10.0)));
        // Fully contained.
        assert!(base.intersects(&Aabb::new(2.0, 2.0, 4.0, 4.0)));
        // Disjoint on each axis.
        assert!(!base.intersects(&Aabb::new(10.5, 0.0, 5.0, 5.0)));
        assert!(!base.intersects(&Aabb::new(0.0, 10.5, 5.0, 5.0)));
        assert!(!base.intersects(&Aabb::new(-6.0, 0.0, 5.0, 5.0)));
        assert!(!base.intersects(&Aabb::new(0.0, -6.0, 5.0, 5.0)));
    }

    #[test]
    fn touching_edges_count_as_overlap() {
        let base = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(base.intersects(&Aabb::new(10.0, 0.0, 5.0, 5.0)));
        assert!(base.intersects(&Aabb::new(0.0, 10.0, 5.0, 5.0)));
        // Corner contact.
        assert!(base.intersects(&Aabb::new(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn property_lookup_ignores_key_casing() {
        let zone = TriggerZone::new(
            TriggerId::new(0),
            "Cannon",
            Aabb::new(0.0, 0.0, 1.0, 1.0),
            vec![
                ("Text".to_string(), "A trophy gun.".to_string()),
                ("URL".to_string(), "http://example.org".to_string()),
            ],
        );

        assert_eq!(zone.property("text"), Some("A trophy gun."));
        assert_eq!(zone.property("Text"), Some("A trophy gun."));
        assert_eq!(zone.property("url"), Some("http://example.org"));
        assert_eq!(zone.property("image"), None);
    }

    #[test]
    fn last_registered_zone_wins_on_multi_overlap() {
        let registry = TriggerRegistry::from_zones(vec![
            zone(0, Aabb::new(0.0, 0.0, 20.0, 20.0)),
            zone(1, Aabb::new(10.0, 10.0, 20.0, 20.0)),
        ]);

        // Probe overlapping both zones resolves to the later registration.
        let probe = Aabb::new(12.0, 12.0, 4.0, 4.0);
        assert_eq!(registry.overlapping(&probe), Some(TriggerId::new(1)));

        // Probe overlapping only the first.
        let probe = Aabb::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(registry.overlapping(&probe), Some(TriggerId::new(0)));

        // Probe overlapping neither.
        let probe = Aabb::new(100.0, 100.0, 4.0, 4.0);
        assert_eq!(registry.overlapping(&probe), None);
    }

    #[test]
    fn lookup_by_id_returns_the_registered_zone() {
        let registry = TriggerRegistry::from_zones(vec![
            zone(0, Aabb::new(0.0, 0.0, 10.0, 10.0)),
            zone(1, Aabb::new(20.0, 0.0, 10.0, 10.0)),
        ]);

        assert_eq!(registry.get(TriggerId::new(1)).map(|z| z.name.as_str()), Some("zone 1"));
        assert!(registry.get(TriggerId::new(5)).is_none());
    }

    #[test]
    #[should_panic(expected = "registration order")]
    fn out_of_order_ids_are_rejected() {
        TriggerRegistry::from_zones(vec![zone(3, Aabb::new(0.0, 0.0, 1.0, 1.0))]);
    }

    #[test]
    fn empty_registry_never_fires() {
        let registry = TriggerRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(
            registry.overlapping(&Aabb::new(0.0, 0.0, 1000.0, 1000.0)),
            None
        );
    }

    #[test]
    fn illustration_lookup_is_case_insensitive() {
        let mut library = IllustrationLibrary::default();
        library.insert("Cannon.png", Handle::default());

        assert!(library.resolve("cannon.png").is_some());
        assert!(library.resolve("CANNON.PNG").is_some());
        assert!(library.resolve("statue.png").is_none());
    }
}
