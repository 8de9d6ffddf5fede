//! Systems feeding overlap results and key edges into the state machine.
use bevy::prelude::*;

use crate::interaction::events::{TriggerEnteredEvent, TriggerExitedEvent, UiCommand};
use crate::interaction::state::{InteractionState, ProximityTransition};
use crate::player::components::{CollisionBox, Player};
use crate::world::components::{IllustrationLibrary, TriggerRegistry, WorldPosition};

const INTERACT_KEY: KeyCode = KeyCode::KeyE;
const CANCEL_KEY: KeyCode = KeyCode::Escape;

/// Re-evaluates which trigger zone (if any) overlaps the player's box.
/// Skipped entirely while a modal is open.
pub fn track_trigger_overlap(
    mut state: ResMut<InteractionState>,
    registry: Res<TriggerRegistry>,
    player: Query<(&WorldPosition, &CollisionBox), With<Player>>,
    mut entered: MessageWriter<TriggerEnteredEvent>,
    mut exited: MessageWriter<TriggerExitedEvent>,
    mut ui: MessageWriter<UiCommand>,
) {
    if !state.is_closed() {
        return;
    }
    let Ok((position, collision)) = player.single() else {
        return;
    };

    let probe = collision.player_aabb(position.0);
    let outcome = state.observe_overlap(registry.overlapping(&probe));

    for transition in outcome.transitions {
        match transition {
            ProximityTransition::Exited(trigger) => {
                debug!(target: "interaction", "Left {}", trigger);
                exited.write(TriggerExitedEvent { trigger });
            }
            ProximityTransition::Entered(trigger) => {
                debug!(target: "interaction", "Entered {}", trigger);
                entered.write(TriggerEnteredEvent { trigger });
            }
        }
    }
    for command in outcome.commands {
        ui.write(command);
    }
}

/// Opens the current trigger's dialogue on an interact key edge.
pub fn handle_interact_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<InteractionState>,
    registry: Res<TriggerRegistry>,
    library: Res<IllustrationLibrary>,
    mut players: Query<&mut Player>,
    mut ui: MessageWriter<UiCommand>,
) {
    if !keyboard.just_pressed(INTERACT_KEY) {
        return;
    }
    let Some(id) = state.current_trigger() else {
        return;
    };
    let Some(zone) = registry.get(id) else {
        warn!("Current trigger {} missing from the registry", id);
        return;
    };

    let commands = state.open_trigger(zone, &library);
    if commands.is_empty() {
        return;
    }
    for mut player in players.iter_mut() {
        player.velocity = Vec2::ZERO;
        player.moving = false;
    }
    info!("Opened dialogue for {} (\"{}\")", zone.id, zone.name);
    for command in commands {
        ui.write(command);
    }
}

/// Closes the trigger dialogue on a cancel key edge.
pub fn handle_cancel_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<InteractionState>,
    mut ui: MessageWriter<UiCommand>,
) {
    if !keyboard.just_pressed(CANCEL_KEY) {
        return;
    }
    for command in state.close_dialogue() {
        ui.write(command);
    }
}

/// Advances the one-shot ambient prompt auto-hide timer.
pub fn tick_prompt_dwell(
    time: Res<Time>,
    mut state: ResMut<InteractionState>,
    mut ui: MessageWriter<UiCommand>,
) {
    for command in state.tick_prompt_dwell(time.delta()) {
        ui.write(command);
    }
}
