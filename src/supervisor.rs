//! Game-level progression: levels, score, messages, and the interlock
//! driving of the subordinate machines.

use crate::display::{Canvas, TouchScreen};
use crate::player::SequencePlayer;
use crate::store::SequenceStore;
use crate::timer::SeedTimer;
use crate::timing::GameTiming;
use crate::types::{Message, Region};
use crate::verifier::SequenceVerifier;
use heapless::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Sequence length of the first level of a new game.
pub const STARTING_SEQUENCE_LENGTH: usize = 4;

/// How many regions the sequence grows per completed level.
pub const LEVEL_GROWTH: usize = 1;

/// The supervisor's current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    /// One-shot hardware bring-up.
    Initial,
    /// Intro screen; waiting for a touch to start a new game.
    TouchToStart,
    /// Waiting for the starting touch to be released before the next round.
    WaitForRelease,
    /// Short breather before playback begins.
    PauseBeforeFlash,
    /// Sequence playback is running.
    FlashingSequence,
    /// The player is repeating the sequence.
    VerifyingSequence,
    /// Full sequence repeated; celebrating.
    Congratulating,
    /// Waiting for a touch to start the next, longer level.
    TouchForNewLevel,
    /// Showing the session score.
    DisplayingScore,
}

/// Top-level orchestrator of the memory game.
///
/// Owns game progression (level length, score), drives the interlock
/// protocol against [`SequencePlayer`] and [`SequenceVerifier`], and manages
/// the on-screen status messages. All entry actions are applied on the
/// transition into a phase.
///
/// # Type Parameters
/// * `N` - Maximum sequence length (matches the [`SequenceStore`] capacity)
#[derive(Debug)]
pub struct GameSupervisor<const N: usize> {
    phase: GamePhase,
    timing: GameTiming,
    counter: u32,
    longest_run: u16,
    message: Option<Message>,
}

impl<const N: usize> GameSupervisor<N> {
    /// Creates a supervisor in its initial phase.
    pub fn new(timing: GameTiming) -> Self {
        Self {
            phase: GamePhase::Initial,
            timing,
            counter: 0,
            longest_run: 0,
            message: None,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Longest sequence fully repeated this session.
    ///
    /// Updated only on a clean full-sequence success; reset when a new game
    /// starts.
    pub fn longest_run(&self) -> u16 {
        self.longest_run
    }

    /// Advances the machine by one tick.
    pub fn tick<T, C, H>(
        &mut self,
        store: &mut SequenceStore<N>,
        player: &mut SequencePlayer,
        verifier: &mut SequenceVerifier,
        timer: &mut H,
        screen: &mut T,
        canvas: &mut C,
    ) where
        T: TouchScreen,
        C: Canvas,
        H: SeedTimer,
    {
        // Current-state actions
        match self.phase {
            GamePhase::PauseBeforeFlash
            | GamePhase::Congratulating
            | GamePhase::TouchForNewLevel
            | GamePhase::DisplayingScore => self.counter += 1,
            _ => {}
        }

        // State transitions
        match self.phase {
            GamePhase::Initial => {
                if timer.init().is_err() {
                    // Best effort: without the timer the sequence seed is
                    // predictable, but the game still runs.
                    #[cfg(feature = "defmt")]
                    defmt::warn!("interval timer init failed; seed will be constant");
                }
                self.enter(GamePhase::TouchToStart, store, player, verifier, timer, canvas);
            }
            GamePhase::TouchToStart => {
                if screen.is_touched() {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("touch detected; starting a new game");
                    self.longest_run = 0;
                    self.generate_sequence(store, timer, STARTING_SEQUENCE_LENGTH.min(N));
                    store.set_active_len(0);
                    self.enter(GamePhase::WaitForRelease, store, player, verifier, timer, canvas);
                }
            }
            GamePhase::WaitForRelease => {
                if !screen.is_touched() {
                    self.enter(
                        GamePhase::PauseBeforeFlash,
                        store,
                        player,
                        verifier,
                        timer,
                        canvas,
                    );
                }
            }
            GamePhase::PauseBeforeFlash => {
                if self.counter == self.timing.pause {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("flashing sequence, active length {}", store.active_len());
                    self.enter(
                        GamePhase::FlashingSequence,
                        store,
                        player,
                        verifier,
                        timer,
                        canvas,
                    );
                }
            }
            GamePhase::FlashingSequence => {
                if player.completed() {
                    self.enter(
                        GamePhase::VerifyingSequence,
                        store,
                        player,
                        verifier,
                        timer,
                        canvas,
                    );
                }
            }
            GamePhase::VerifyingSequence => {
                if verifier.is_complete() {
                    verifier.disable();
                    if verifier.is_timeout_error() || verifier.is_user_input_error() {
                        #[cfg(feature = "defmt")]
                        defmt::debug!(
                            "verification failed (timeout: {}, wrong touch: {})",
                            verifier.is_timeout_error(),
                            verifier.is_user_input_error()
                        );
                        self.enter(
                            GamePhase::DisplayingScore,
                            store,
                            player,
                            verifier,
                            timer,
                            canvas,
                        );
                    } else if store.active_len() == store.len() {
                        self.enter(
                            GamePhase::Congratulating,
                            store,
                            player,
                            verifier,
                            timer,
                            canvas,
                        );
                    } else {
                        self.enter(
                            GamePhase::WaitForRelease,
                            store,
                            player,
                            verifier,
                            timer,
                            canvas,
                        );
                    }
                }
            }
            GamePhase::Congratulating => {
                if self.counter == self.timing.congrats {
                    self.enter(
                        GamePhase::TouchForNewLevel,
                        store,
                        player,
                        verifier,
                        timer,
                        canvas,
                    );
                }
            }
            GamePhase::TouchForNewLevel => {
                if screen.is_touched() {
                    let next_len = (store.len() + LEVEL_GROWTH).min(N);
                    self.generate_sequence(store, timer, next_len);
                    store.set_active_len(0);
                    self.enter(GamePhase::WaitForRelease, store, player, verifier, timer, canvas);
                } else if self.counter == self.timing.new_level_timeout {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("new-level prompt timed out; showing score");
                    self.enter(
                        GamePhase::DisplayingScore,
                        store,
                        player,
                        verifier,
                        timer,
                        canvas,
                    );
                }
            }
            GamePhase::DisplayingScore => {
                if self.counter == self.timing.score {
                    self.enter(GamePhase::TouchToStart, store, player, verifier, timer, canvas);
                }
            }
        }
    }

    /// Applies the entry actions for `next`, then enters it.
    fn enter<C, H>(
        &mut self,
        next: GamePhase,
        store: &mut SequenceStore<N>,
        player: &mut SequencePlayer,
        verifier: &mut SequenceVerifier,
        timer: &mut H,
        canvas: &mut C,
    ) where
        C: Canvas,
        H: SeedTimer,
    {
        match next {
            GamePhase::Initial => {}
            GamePhase::TouchToStart => {
                self.erase_message(canvas);
                self.show_message(canvas, Message::Intro);
                timer.reset();
                timer.start();
            }
            GamePhase::WaitForRelease => {
                store.set_active_len(store.active_len() + 1);
            }
            GamePhase::PauseBeforeFlash => {
                self.erase_message(canvas);
                self.counter = 0;
            }
            GamePhase::FlashingSequence => {
                for region in Region::ALL {
                    canvas.erase_button(region);
                }
                player.enable();
            }
            GamePhase::VerifyingSequence => {
                player.disable();
                verifier.enable();
                for region in Region::ALL {
                    canvas.draw_button(region);
                }
            }
            GamePhase::Congratulating => {
                for region in Region::ALL {
                    canvas.erase_button(region);
                }
                self.longest_run = store.len() as u16;
                self.show_message(canvas, Message::Congratulations);
                self.counter = 0;
            }
            GamePhase::TouchForNewLevel => {
                self.erase_message(canvas);
                self.show_message(canvas, Message::NewLevelPrompt);
                timer.reset();
                timer.start();
                self.counter = 0;
            }
            GamePhase::DisplayingScore => {
                for region in Region::ALL {
                    canvas.erase_button(region);
                }
                self.erase_message(canvas);
                self.show_message(canvas, Message::Score(self.longest_run));
                self.counter = 0;
            }
        }
        self.phase = next;
    }

    /// Generates a fresh random sequence of `length` regions.
    ///
    /// Seeded from the free-running hardware timer so each game is
    /// unpredictable; the sequence is copied into the store from a scratch
    /// buffer that is dropped here.
    fn generate_sequence<H: SeedTimer>(
        &mut self,
        store: &mut SequenceStore<N>,
        timer: &mut H,
        length: usize,
    ) {
        timer.stop();
        let mut rng = SmallRng::seed_from_u64(u64::from(timer.ticks()));
        let mut sequence: Vec<Region, N> = Vec::new();
        for _ in 0..length.min(N) {
            let region = Region::ALL[rng.gen_range(0..Region::COUNT)];
            let _ = sequence.push(region);
        }
        store.set_sequence(&sequence);
    }

    /// Shows `message` and remembers it as the one currently on screen.
    fn show_message<C: Canvas>(&mut self, canvas: &mut C, message: Message) {
        canvas.show_message(message);
        self.message = Some(message);
    }

    /// Erases exactly the currently displayed message, if any.
    fn erase_message<C: Canvas>(&mut self, canvas: &mut C) {
        if let Some(message) = self.message.take() {
            canvas.erase_message(message);
        }
    }
}
