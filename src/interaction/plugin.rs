//! Interaction plugin wiring proximity tracking and dialogue transitions.
use bevy::prelude::*;

use crate::interaction::{
    events::{TriggerEnteredEvent, TriggerExitedEvent, UiCommand},
    state::InteractionState,
    systems::{handle_cancel_input, handle_interact_input, tick_prompt_dwell, track_trigger_overlap},
};
use crate::player::systems::drive_player_movement;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionState>()
            .add_event::<TriggerEnteredEvent>()
            .add_event::<TriggerExitedEvent>()
            .add_event::<UiCommand>()
            .add_systems(
                Update,
                (
                    // Overlap is evaluated against this frame's position.
                    track_trigger_overlap.after(drive_player_movement),
                    handle_interact_input.after(track_trigger_overlap),
                    handle_cancel_input.after(handle_interact_input),
                    tick_prompt_dwell.after(handle_cancel_input),
                ),
            );
    }
}
