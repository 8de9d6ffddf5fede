// src/ui/prompt/systems.rs

use bevy::prelude::*;

use crate::interaction::events::UiCommand;

use super::components::{PromptRoot, PromptSettings, PromptText};

const PROMPT_BACKGROUND: Color = Color::srgba(0.10, 0.10, 0.18, 0.85);
const PROMPT_TEXT_COLOR: Color = Color::srgb(0.91, 0.84, 0.72);

/// Spawns the prompt strip hidden. Content and visibility are driven
/// entirely by `UiCommand` messages.
pub fn setup_prompt(mut commands: Commands, settings: Res<PromptSettings>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                display: Display::None,
                ..default()
            },
            ZIndex(100),
            PromptRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.font_size,
                    ..default()
                },
                TextColor(PROMPT_TEXT_COLOR),
                BackgroundColor(PROMPT_BACKGROUND),
                Node {
                    padding: UiRect::axes(
                        Val::Px(settings.padding_x),
                        Val::Px(settings.padding_y),
                    ),
                    ..default()
                },
                PromptText,
            ));
        });
}

/// Applies prompt show/hide commands. Other UI commands are ignored here.
pub fn apply_prompt_commands(
    mut commands_in: MessageReader<UiCommand>,
    mut root_query: Query<&mut Node, With<PromptRoot>>,
    mut text_query: Query<&mut Text, With<PromptText>>,
) {
    for command in commands_in.read() {
        match command {
            UiCommand::ShowPrompt(message) => {
                if let Ok(mut text) = text_query.single_mut() {
                    text.0 = (*message).to_string();
                }
                if let Ok(mut node) = root_query.single_mut() {
                    node.display = Display::Flex;
                }
            }
            UiCommand::HidePrompt => {
                if let Ok(mut node) = root_query.single_mut() {
                    node.display = Display::None;
                }
            }
            _ => {}
        }
    }
}
