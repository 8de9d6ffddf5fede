// src/ui/welcome/components.rs

use bevy::prelude::*;

/// Marker on the full-screen overlay. Clicking it dismisses the welcome.
#[derive(Component)]
pub struct WelcomeRoot;

/// Marker on the promotional link inside the welcome panel.
#[derive(Component)]
pub struct WelcomeLinkButton;

pub const WELCOME_TITLE: &str = "Gregson Park";
pub const WELCOME_BODY: &str = "Take a stroll through a pixel rendition of Gregson Park. \
Walk up to the landmarks dotted around the grounds and press E to read about them.";
pub const WELCOME_LINK_URL: &str = "https://newcastle.nsw.gov.au/explore/places-and-spaces/parks-and-playgrounds/gregson-park";
pub const WELCOME_LINK_LABEL: &str = "About the real Gregson Park";
pub const WELCOME_HINT: &str = "Click anywhere to begin";
