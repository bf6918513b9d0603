//! Timed playback of the active sequence prefix.

use crate::display::Canvas;
use crate::interlock::Gate;
use crate::store::SequenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum PlayerState {
    /// Waiting to be enabled.
    Idle,
    /// Light the current sequence entry.
    Flash,
    /// Hold the lit region for the flash duration.
    Hold,
    /// Whole active prefix played; waiting to be disabled.
    Done,
}

/// Replays the first `active_len` entries of the sequence with fixed on/off
/// timing.
///
/// Purely timed presentation; playback cannot fail. `completed` latches once
/// the whole active prefix has been shown and clears when the machine is
/// re-armed.
#[derive(Debug)]
pub struct SequencePlayer {
    state: PlayerState,
    gate: Gate,
    flash_ticks: u32,
    hold_counter: u32,
    index: usize,
    completed: bool,
}

impl SequencePlayer {
    /// Creates an idle player with the given per-entry flash duration in
    /// ticks.
    pub fn new(flash_ticks: u32) -> Self {
        Self {
            state: PlayerState::Idle,
            gate: Gate::new(),
            flash_ticks,
            hold_counter: 0,
            index: 0,
            completed: false,
        }
    }

    /// Starts playback of the active prefix.
    pub fn enable(&mut self) {
        self.gate.enable();
    }

    /// Returns the player to idle (observed at its next boundary transition).
    pub fn disable(&mut self) {
        self.gate.disable();
    }

    /// True once the whole active prefix has been played.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// True while the machine sits in its idle state.
    pub fn is_idle(&self) -> bool {
        self.state == PlayerState::Idle
    }

    /// Advances the machine by one tick.
    pub fn tick<C: Canvas, const N: usize>(&mut self, store: &SequenceStore<N>, canvas: &mut C) {
        // Current-state actions
        if self.state == PlayerState::Hold {
            self.hold_counter += 1;
        }

        // State transitions
        match self.state {
            PlayerState::Idle => {
                if self.gate.is_open() {
                    self.completed = false;
                    self.index = 0;
                    if store.active_len() == 0 {
                        // Nothing to play.
                        self.completed = true;
                        self.state = PlayerState::Done;
                    } else {
                        self.state = PlayerState::Flash;
                    }
                }
            }
            PlayerState::Flash => {
                canvas.light_region(store.value(self.index));
                self.hold_counter = 0;
                self.state = PlayerState::Hold;
            }
            PlayerState::Hold => {
                if self.hold_counter == self.flash_ticks {
                    canvas.dim_region(store.value(self.index));
                    self.index += 1;
                    if self.index < store.active_len() {
                        self.state = PlayerState::Flash;
                    } else {
                        self.completed = true;
                        self.state = PlayerState::Done;
                    }
                }
            }
            PlayerState::Done => {
                if !self.gate.is_open() {
                    self.gate.settle();
                    self.state = PlayerState::Idle;
                }
            }
        }
    }
}
