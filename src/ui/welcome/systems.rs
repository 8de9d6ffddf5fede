// src/ui/welcome/systems.rs
//
// Systems for the startup welcome overlay.

use bevy::{
    ecs::message::{MessageReader, MessageWriter},
    prelude::*,
};

use crate::core::settings::GameSettings;
use crate::interaction::events::UiCommand;
use crate::interaction::state::InteractionState;
use crate::ui::link::ActiveLinkOpener;

use super::components::{
    WelcomeLinkButton, WelcomeRoot, WELCOME_BODY, WELCOME_HINT, WELCOME_LINK_LABEL,
    WELCOME_LINK_URL, WELCOME_TITLE,
};

// Visual constants
const OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const PANEL_COLOR: Color = Color::srgba(0.10, 0.10, 0.18, 0.95);
const BORDER_COLOR: Color = Color::srgb(0.55, 0.45, 0.33);
const TEXT_COLOR: Color = Color::srgb(0.91, 0.84, 0.72);
const LINK_COLOR: Color = Color::srgb(0.42, 0.61, 0.82);
const HINT_COLOR: Color = Color::srgb(0.53, 0.53, 0.53);

/// Spawn the welcome overlay covering the whole screen.
///
/// The root node is itself a button: any press outside the link dismisses
/// the welcome. The panel has no `Interaction`, so clicks on it fall
/// through to the root.
pub fn setup_welcome(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            Button,
            Interaction::None,
            ZIndex(200),
            WelcomeRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        width: Val::Px(520.0),
                        padding: UiRect::all(Val::Px(24.0)),
                        border: UiRect::all(Val::Px(3.0)),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(14.0),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                    BorderColor::from(BORDER_COLOR),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(WELCOME_TITLE),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                    panel.spawn((
                        Text::new(WELCOME_BODY),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                    panel
                        .spawn((Button, Interaction::None, WelcomeLinkButton, Node::default()))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(WELCOME_LINK_LABEL),
                                TextFont {
                                    font_size: 14.0,
                                    ..default()
                                },
                                TextColor(LINK_COLOR),
                            ));
                        });
                    panel.spawn((
                        Text::new(WELCOME_HINT),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(HINT_COLOR),
                    ));
                });
        });
}

/// Route welcome clicks: the link opens the park page, anything else
/// dismisses the overlay.
pub fn handle_welcome_clicks(
    mut state: ResMut<InteractionState>,
    settings: Res<GameSettings>,
    opener: Res<ActiveLinkOpener>,
    mut ui: MessageWriter<UiCommand>,
    link_query: Query<&Interaction, (Changed<Interaction>, With<WelcomeLinkButton>)>,
    root_query: Query<&Interaction, (Changed<Interaction>, With<WelcomeRoot>)>,
) {
    for interaction in link_query.iter() {
        if *interaction == Interaction::Pressed {
            opener.open(WELCOME_LINK_URL);
            return;
        }
    }

    for interaction in root_query.iter() {
        if *interaction == Interaction::Pressed {
            info!("Welcome dismissed, entering play");
            for command in state.dismiss_welcome(settings.prompt_dwell_seconds) {
                ui.write(command);
            }
        }
    }
}

/// Despawn the overlay once the state machine confirms the dismissal.
pub fn apply_welcome_commands(
    mut commands: Commands,
    mut commands_in: MessageReader<UiCommand>,
    root_query: Query<Entity, With<WelcomeRoot>>,
) {
    for command in commands_in.read() {
        if *command == UiCommand::HideWelcome {
            for entity in root_query.iter() {
                commands.entity(entity).despawn();
            }
        }
    }
}
