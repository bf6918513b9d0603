//! Verification of the player's touches against the active sequence prefix.

use crate::detector::TouchRegionDetector;
use crate::interlock::Gate;
use crate::store::SequenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum VerifierState {
    /// Waiting to be enabled.
    Idle,
    /// Detector armed; waiting for one touch-release cycle or the per-symbol
    /// timeout.
    AwaitRelease,
    /// Terminal: success, mismatch or timeout. Waiting to be disabled.
    Done,
}

/// Consumes touches one at a time and checks them against the active prefix.
///
/// Owns the per-symbol timeout; the detector itself never times out. Every
/// terminal outcome - success, mismatch, timeout - reports
/// [`is_complete`](SequenceVerifier::is_complete); callers inspect the error
/// flags to tell them apart. After a terminal state no further touches are
/// consumed.
#[derive(Debug)]
pub struct SequenceVerifier {
    state: VerifierState,
    gate: Gate,
    timeout_ticks: u32,
    timeout_counter: u32,
    index: usize,
    complete: bool,
    timeout_error: bool,
    user_input_error: bool,
}

impl SequenceVerifier {
    /// Creates an idle verifier with the given per-symbol timeout in ticks.
    pub fn new(timeout_ticks: u32) -> Self {
        Self {
            state: VerifierState::Idle,
            gate: Gate::new(),
            timeout_ticks,
            timeout_counter: 0,
            index: 0,
            complete: false,
            timeout_error: false,
            user_input_error: false,
        }
    }

    /// Starts a verification pass over the active prefix.
    pub fn enable(&mut self) {
        self.gate.enable();
    }

    /// Returns the verifier to idle (observed at its next boundary
    /// transition).
    pub fn disable(&mut self) {
        self.gate.disable();
    }

    /// True in every terminal case; check the error flags for the outcome.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// True when a symbol was not touched and released within the window.
    pub fn is_timeout_error(&self) -> bool {
        self.timeout_error
    }

    /// True when the wrong region was touched.
    pub fn is_user_input_error(&self) -> bool {
        self.user_input_error
    }

    /// True while the machine sits in its idle state.
    pub fn is_idle(&self) -> bool {
        self.state == VerifierState::Idle
    }

    /// Advances the machine by one tick.
    ///
    /// The detector is a sibling machine ticked by the scheduler; this
    /// machine only drives its gate and reads its latch.
    pub fn tick<const N: usize>(
        &mut self,
        store: &SequenceStore<N>,
        detector: &mut TouchRegionDetector,
    ) {
        // Current-state actions
        if self.state == VerifierState::AwaitRelease {
            self.timeout_counter += 1;
        }

        // State transitions
        match self.state {
            VerifierState::Idle => {
                if self.gate.is_open() {
                    self.index = 0;
                    self.complete = false;
                    self.timeout_error = false;
                    self.user_input_error = false;
                    self.timeout_counter = 0;
                    detector.enable();
                    self.state = VerifierState::AwaitRelease;
                }
            }
            VerifierState::AwaitRelease => {
                if let Some(region) = detector.released_region() {
                    detector.disable();
                    if region != store.value(self.index) {
                        self.user_input_error = true;
                        self.complete = true;
                        self.state = VerifierState::Done;
                    } else {
                        self.index += 1;
                        if self.index == store.active_len() {
                            self.complete = true;
                            self.state = VerifierState::Done;
                        } else {
                            // Interlock round trip: the gate defers this
                            // reopen until the detector has drained to idle.
                            detector.enable();
                            self.timeout_counter = 0;
                        }
                    }
                } else if self.timeout_counter == self.timeout_ticks {
                    self.timeout_error = true;
                    self.complete = true;
                    detector.disable();
                    self.state = VerifierState::Done;
                }
            }
            VerifierState::Done => {
                if !self.gate.is_open() {
                    self.gate.settle();
                    self.state = VerifierState::Idle;
                }
            }
        }
    }
}
