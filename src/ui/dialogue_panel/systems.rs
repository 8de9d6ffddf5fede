// src/ui/dialogue_panel/systems.rs
//
// Systems for spawning, despawning, and interacting with dialogue panels.

use bevy::{ecs::message::MessageReader, prelude::*};

use crate::interaction::events::{DialogueContent, UiCommand};
use crate::ui::link::ActiveLinkOpener;

use super::components::{
    DialogueLinkButton, DialoguePanelRoot, DialoguePanelSettings, DialoguePanelTracker,
};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.10, 0.10, 0.18, 0.95);
const BORDER_COLOR: Color = Color::srgb(0.55, 0.45, 0.33);
const TEXT_COLOR: Color = Color::srgb(0.91, 0.84, 0.72);
const LINK_COLOR: Color = Color::srgb(0.42, 0.61, 0.82);
const HINT_COLOR: Color = Color::srgb(0.53, 0.53, 0.53);
const CAPTION_COLOR: Color = Color::srgb(1.0, 0.9, 0.4); // Yellow/gold
const CLOSE_HINT: &str = "Press ESC to close";

/// Spawn and despawn dialogue panels in response to UI commands.
///
/// A `ShowDialogue` always replaces any panel already on screen, so the
/// tracker holds at most one entity.
pub fn apply_dialogue_commands(
    mut commands: Commands,
    mut tracker: ResMut<DialoguePanelTracker>,
    settings: Res<DialoguePanelSettings>,
    mut commands_in: MessageReader<UiCommand>,
) {
    for command in commands_in.read() {
        match command {
            UiCommand::ShowDialogue(content) => {
                // If a panel already exists, despawn it first
                if let Some(old_panel) = tracker.active_panel.take() {
                    commands.entity(old_panel).despawn();
                }

                let panel_entity = spawn_panel(&mut commands, &settings, content);
                tracker.active_panel = Some(panel_entity);
            }
            UiCommand::HideDialogue => {
                if let Some(old_panel) = tracker.active_panel.take() {
                    commands.entity(old_panel).despawn();
                }
            }
            _ => {}
        }
    }
}

fn spawn_panel(
    commands: &mut Commands,
    settings: &DialoguePanelSettings,
    content: &DialogueContent,
) -> Entity {
    let content = content.clone();
    let illustration_width = settings.illustration_width;
    let caption_font_size = settings.caption_font_size;
    let text_font_size = settings.text_font_size;
    let link_font_size = settings.link_font_size;
    let hint_font_size = settings.hint_font_size;

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ZIndex(100),
            DialoguePanelRoot,
        ))
        .with_children(|wrapper| {
            wrapper
                .spawn((
                    Node {
                        width: Val::Px(settings.panel_width),
                        min_height: Val::Px(settings.panel_min_height),
                        padding: UiRect::all(Val::Px(settings.padding)),
                        border: UiRect::all(Val::Px(settings.border_width)),
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(settings.padding),
                        ..default()
                    },
                    BackgroundColor(BACKGROUND_COLOR),
                    BorderColor::from(BORDER_COLOR),
                ))
                .with_children(|panel| {
                    // Illustration column (illustrated layout only)
                    if let Some(ref illustration) = content.illustration {
                        panel
                            .spawn(Node {
                                width: Val::Px(illustration_width),
                                flex_direction: FlexDirection::Column,
                                align_items: AlignItems::Center,
                                row_gap: Val::Px(6.0),
                                ..default()
                            })
                            .with_children(|column| {
                                column.spawn((
                                    Text::new(&illustration.caption),
                                    TextFont {
                                        font_size: caption_font_size,
                                        ..default()
                                    },
                                    TextColor(CAPTION_COLOR),
                                ));
                                column.spawn((
                                    ImageNode::new(illustration.image.clone()),
                                    Node {
                                        width: Val::Px(illustration_width),
                                        ..default()
                                    },
                                ));
                            });
                    }

                    // Text column
                    panel
                        .spawn(Node {
                            flex_direction: FlexDirection::Column,
                            flex_grow: 1.0,
                            row_gap: Val::Px(8.0),
                            ..default()
                        })
                        .with_children(|column| {
                            column.spawn((
                                Text::new(&content.text),
                                TextFont {
                                    font_size: text_font_size,
                                    ..default()
                                },
                                TextColor(TEXT_COLOR),
                            ));

                            // External link, when the zone provides one
                            if let Some(ref url) = content.url {
                                column
                                    .spawn((
                                        Button,
                                        Interaction::None,
                                        DialogueLinkButton { url: url.clone() },
                                        Node::default(),
                                    ))
                                    .with_children(|button| {
                                        button.spawn((
                                            Text::new(format!("Read more: {}", url)),
                                            TextFont {
                                                font_size: link_font_size,
                                                ..default()
                                            },
                                            TextColor(LINK_COLOR),
                                        ));
                                    });
                            }

                            column.spawn((
                                Text::new(CLOSE_HINT),
                                TextFont {
                                    font_size: hint_font_size,
                                    ..default()
                                },
                                TextColor(HINT_COLOR),
                            ));
                        });
                });
        })
        .id()
}

/// Open the external link when its button is pressed.
pub fn handle_link_buttons(
    opener: Res<ActiveLinkOpener>,
    button_query: Query<(&Interaction, &DialogueLinkButton), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, link) in button_query.iter() {
        if *interaction == Interaction::Pressed {
            opener.open(&link.url);
        }
    }
}
