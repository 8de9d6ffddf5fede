//! Messages emitted by the interaction systems.
use bevy::prelude::*;

use crate::world::components::{IllustrationLibrary, TriggerId, TriggerZone};

/// Shown when an authored zone carries no `text` property.
pub const DEFAULT_DIALOGUE_TEXT: &str = "No text available.";

/// Fired when the player's box starts overlapping a trigger zone.
#[derive(Event, Message, Debug, Clone)]
pub struct TriggerEnteredEvent {
    pub trigger: TriggerId,
}

/// Fired when the player's box stops overlapping the current trigger zone.
#[derive(Event, Message, Debug, Clone)]
pub struct TriggerExitedEvent {
    pub trigger: TriggerId,
}

/// Resolved dialogue content ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueContent {
    pub text: String,
    pub url: Option<String>,
    pub illustration: Option<Illustration>,
}

/// Image plus caption for the illustrated dialogue layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Illustration {
    pub caption: String,
    pub image: Handle<Image>,
}

impl DialogueContent {
    /// Resolves a zone's property bag into displayable content.
    ///
    /// Every absence degrades to a default: missing text becomes the
    /// placeholder, a missing URL hides the link, and an `image` that the
    /// library cannot resolve is treated as absent (plain layout).
    pub fn resolve(zone: &TriggerZone, library: &IllustrationLibrary) -> Self {
        let text = zone
            .property("text")
            .unwrap_or(DEFAULT_DIALOGUE_TEXT)
            .to_string();
        let url = zone.property("url").map(str::to_string);
        let illustration = zone.property("image").and_then(|name| {
            library.resolve(name).map(|image| Illustration {
                caption: zone.name.clone(),
                image,
            })
        });
        Self {
            text,
            url,
            illustration,
        }
    }
}

/// Declarative render command consumed by the UI plugins.
#[derive(Event, Message, Debug, Clone, PartialEq)]
pub enum UiCommand {
    ShowPrompt(&'static str),
    HidePrompt,
    ShowDialogue(DialogueContent),
    HideDialogue,
    HideWelcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::components::Aabb;

    fn zone_with(properties: Vec<(&str, &str)>) -> TriggerZone {
        TriggerZone::new(
            TriggerId::new(0),
            "Bandstand",
            Aabb::new(0.0, 0.0, 10.0, 10.0),
            properties
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn text_and_url_without_image_stay_plain() {
        let zone = zone_with(vec![("text", "Hello"), ("url", "http://x")]);
        let content = DialogueContent::resolve(&zone, &IllustrationLibrary::default());

        assert_eq!(content.text, "Hello");
        assert_eq!(content.url.as_deref(), Some("http://x"));
        assert!(content.illustration.is_none());
    }

    #[test]
    fn resolvable_image_selects_illustrated_layout() {
        let mut library = IllustrationLibrary::default();
        library.insert("Photo.png", Handle::default());

        let zone = zone_with(vec![("image", "Photo.png"), ("text", "Caption")]);
        let content = DialogueContent::resolve(&zone, &library);

        let illustration = content.illustration.expect("image should resolve");
        assert_eq!(illustration.caption, "Bandstand");
        assert_eq!(content.text, "Caption");
    }

    #[test]
    fn unresolvable_image_falls_back_to_plain() {
        let zone = zone_with(vec![("Image", "missing.png"), ("Text", "Caption")]);
        let content = DialogueContent::resolve(&zone, &IllustrationLibrary::default());

        assert!(content.illustration.is_none());
        assert_eq!(content.text, "Caption");
    }

    #[test]
    fn empty_property_bag_uses_defaults() {
        let zone = zone_with(vec![]);
        let content = DialogueContent::resolve(&zone, &IllustrationLibrary::default());

        assert_eq!(content.text, DEFAULT_DIALOGUE_TEXT);
        assert!(content.url.is_none());
        assert!(content.illustration.is_none());
    }

    #[test]
    fn authored_casings_resolve_identically() {
        let mut library = IllustrationLibrary::default();
        library.insert("photo.png", Handle::default());

        let zone = zone_with(vec![("Text", "Hi"), ("URL", "http://x"), ("Image", "photo.png")]);
        let content = DialogueContent::resolve(&zone, &library);

        assert_eq!(content.text, "Hi");
        assert_eq!(content.url.as_deref(), Some("http://x"));
        assert!(content.illustration.is_some());
    }
}
