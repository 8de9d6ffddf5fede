//! The dialogue state machine and current-trigger bookkeeping.
//!
//! All transitions are pure methods on [`InteractionState`] returning the
//! render commands the UI layer should apply. Systems stay thin adapters,
//! which keeps every transition unit-testable without an `App`.
use std::time::Duration;

use bevy::prelude::*;

use crate::interaction::events::{DialogueContent, UiCommand};
use crate::world::components::{IllustrationLibrary, TriggerId, TriggerZone};

pub const MOVE_PROMPT: &str = "Arrow keys or WASD to move";
pub const READ_PROMPT: &str = "Press E to read";

/// Which modal (if any) owns the screen. Movement and proximity updates run
/// only in `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogueMode {
    /// The introductory overlay shown before any gameplay.
    #[default]
    Welcome,
    Closed,
    ShowingTrigger(TriggerId),
}

/// Enter/exit transition observed by the proximity tracker. A direct
/// zone-to-zone handoff yields an exit followed by an enter in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityTransition {
    Exited(TriggerId),
    Entered(TriggerId),
}

/// What one overlap observation produced.
#[derive(Debug, Default)]
pub struct OverlapOutcome {
    pub transitions: Vec<ProximityTransition>,
    pub commands: Vec<UiCommand>,
}

/// Single owned interaction state: the dialogue mode, the trigger currently
/// under the player, and the one-shot ambient prompt dwell timer.
#[derive(Resource, Debug, Default)]
pub struct InteractionState {
    mode: DialogueMode,
    current_trigger: Option<TriggerId>,
    prompt_dwell: Option<Timer>,
}

impl InteractionState {
    pub fn mode(&self) -> DialogueMode {
        self.mode
    }

    pub fn is_closed(&self) -> bool {
        self.mode == DialogueMode::Closed
    }

    pub fn current_trigger(&self) -> Option<TriggerId> {
        self.current_trigger
    }

    /// Feeds this frame's overlap result into the tracker.
    ///
    /// Frozen (returns nothing, changes nothing) while a modal is open, so
    /// the current trigger holds steady for the dialogue being shown.
    pub fn observe_overlap(&mut self, overlap: Option<TriggerId>) -> OverlapOutcome {
        let mut outcome = OverlapOutcome::default();
        if !self.is_closed() || overlap == self.current_trigger {
            return outcome;
        }

        if let Some(old) = self.current_trigger {
            outcome.transitions.push(ProximityTransition::Exited(old));
        }
        match overlap {
            Some(new) => {
                outcome.transitions.push(ProximityTransition::Entered(new));
                outcome.commands.push(UiCommand::ShowPrompt(READ_PROMPT));
            }
            None => outcome.commands.push(UiCommand::HidePrompt),
        }
        self.current_trigger = overlap;
        outcome
    }

    /// Closed -> ShowingTrigger, on an interact key edge. Returns no
    /// commands (and stays put) unless the zone is actually current.
    pub fn open_trigger(
        &mut self,
        zone: &TriggerZone,
        library: &IllustrationLibrary,
    ) -> Vec<UiCommand> {
        if !self.is_closed() || self.current_trigger != Some(zone.id) {
            return Vec::new();
        }
        self.mode = DialogueMode::ShowingTrigger(zone.id);
        vec![
            UiCommand::HidePrompt,
            UiCommand::ShowDialogue(DialogueContent::resolve(zone, library)),
        ]
    }

    /// ShowingTrigger -> Closed, on a cancel key edge. Re-shows the read
    /// prompt if the player is still standing on a trigger.
    pub fn close_dialogue(&mut self) -> Vec<UiCommand> {
        if !matches!(self.mode, DialogueMode::ShowingTrigger(_)) {
            return Vec::new();
        }
        self.mode = DialogueMode::Closed;
        let mut commands = vec![UiCommand::HideDialogue];
        if self.current_trigger.is_some() {
            commands.push(UiCommand::ShowPrompt(READ_PROMPT));
        }
        commands
    }

    /// Welcome -> Closed, on a pointer press outside the welcome link.
    /// Shows the movement prompt and arms its one-shot auto-hide.
    pub fn dismiss_welcome(&mut self, dwell_seconds: f32) -> Vec<UiCommand> {
        if self.mode != DialogueMode::Welcome {
            return Vec::new();
        }
        self.mode = DialogueMode::Closed;
        self.prompt_dwell = Some(Timer::from_seconds(dwell_seconds, TimerMode::Once));
        vec![UiCommand::HideWelcome, UiCommand::ShowPrompt(MOVE_PROMPT)]
    }

    /// Ticks the ambient prompt dwell timer. When it fires, the hide is
    /// validated against the state at fire time, not at schedule time: an
    /// open dialogue or a current trigger keeps the prompt alive (it is
    /// then governed by proximity instead).
    pub fn tick_prompt_dwell(&mut self, delta: Duration) -> Vec<UiCommand> {
        let Some(timer) = self.prompt_dwell.as_mut() else {
            return Vec::new();
        };
        timer.tick(delta);
        if !timer.is_finished() {
            return Vec::new();
        }
        self.prompt_dwell = None;
        if self.is_closed() && self.current_trigger.is_none() {
            vec![UiCommand::HidePrompt]
        } else {
            Vec::new()
        }
    }
}
