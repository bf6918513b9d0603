//! Top-level game context: owns every state machine and runs one global
//! tick.

use crate::detector::TouchRegionDetector;
use crate::display::{Canvas, TouchScreen};
use crate::player::SequencePlayer;
use crate::store::SequenceStore;
use crate::supervisor::{GamePhase, GameSupervisor};
use crate::timer::SeedTimer;
use crate::timing::GameTiming;
use crate::verifier::SequenceVerifier;

/// The complete memory game: supervisor, subordinate machines and the shared
/// sequence store, wired together.
///
/// The scheduler harness calls [`Game::tick`] once per fixed tick period,
/// forever. Within one global tick the supervisor runs first, then the
/// subordinates; a subordinate enabled during a tick takes its first step on
/// the next one, which is what the interlock protocol relies on.
///
/// # Type Parameters
/// * `H` - Hardware timer used to seed the sequence generator
/// * `N` - Maximum sequence length
pub struct Game<H: SeedTimer, const N: usize> {
    store: SequenceStore<N>,
    detector: TouchRegionDetector,
    player: SequencePlayer,
    verifier: SequenceVerifier,
    supervisor: GameSupervisor<N>,
    timer: H,
}

impl<H: SeedTimer, const N: usize> Game<H, N> {
    /// Wires up a new game from its timing configuration and seed timer.
    pub fn new(timing: GameTiming, timer: H) -> Self {
        Self {
            store: SequenceStore::new(),
            detector: TouchRegionDetector::new(timing.settle),
            player: SequencePlayer::new(timing.flash),
            verifier: SequenceVerifier::new(timing.touch_timeout),
            supervisor: GameSupervisor::new(timing),
            timer,
        }
    }

    /// Runs one global tick: the supervisor, then every subordinate machine.
    pub fn tick<T: TouchScreen, C: Canvas>(&mut self, screen: &mut T, canvas: &mut C) {
        self.supervisor.tick(
            &mut self.store,
            &mut self.player,
            &mut self.verifier,
            &mut self.timer,
            screen,
            canvas,
        );
        self.detector.tick(screen, canvas);
        self.verifier.tick(&self.store, &mut self.detector);
        self.player.tick(&self.store, canvas);
    }

    /// The supervisor's current phase.
    pub fn phase(&self) -> GamePhase {
        self.supervisor.phase()
    }

    /// Longest sequence fully repeated this session.
    pub fn score(&self) -> u16 {
        self.supervisor.longest_run()
    }

    /// Read access to the level sequence (for harness status displays).
    pub fn store(&self) -> &SequenceStore<N> {
        &self.store
    }
}
