//! Two-phase enable gate shared between a supervisor and a subordinate
//! state machine.
//!
//! A subordinate only honors its enable flag at the `Idle`/`Done` boundary
//! transitions, so a supervisor that disables a machine must let one tick
//! elapse before it may rely on the machine being idle again, and must not
//! re-enable it before then. With a plain boolean flag that protocol is a
//! convention; [`Gate`] makes it an API. Disabling an open gate puts it in a
//! draining phase, and a re-enable requested while draining is *deferred*
//! until the machine has acknowledged idle, so the idle entry action runs
//! exactly once per activation - never skipped, never duplicated.
//!
//! Supervisor side: [`Gate::enable`], [`Gate::disable`].
//! Machine side: [`Gate::is_open`] (sampled only at boundary transitions) and
//! [`Gate::settle`] (called when the machine re-enters idle).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum GateState {
    /// Machine is idle and not requested to run.
    Closed,
    /// Machine is allowed to run.
    Open,
    /// Disable requested; waiting for the machine to drain back to idle.
    /// `reopen` records an enable that arrived mid-drain.
    Draining { reopen: bool },
}

/// The interlock gate. One per subordinate state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    state: GateState,
}

impl Gate {
    /// Creates a closed gate.
    pub const fn new() -> Self {
        Self {
            state: GateState::Closed,
        }
    }

    /// Requests that the machine run.
    ///
    /// If the gate is draining, the request is deferred until the machine has
    /// settled back to idle; the machine will then start a fresh activation.
    pub fn enable(&mut self) {
        self.state = match self.state {
            GateState::Closed | GateState::Open => GateState::Open,
            GateState::Draining { .. } => GateState::Draining { reopen: true },
        };
    }

    /// Requests that the machine stop once it reaches its boundary state.
    ///
    /// Cancels any deferred reopen.
    pub fn disable(&mut self) {
        self.state = match self.state {
            GateState::Closed => GateState::Closed,
            GateState::Open | GateState::Draining { .. } => GateState::Draining { reopen: false },
        };
    }

    /// True while the machine is allowed to run.
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self.state, GateState::Open)
    }

    /// Machine-side acknowledgement that it has re-entered idle.
    ///
    /// Resolves a draining gate to closed, or straight back to open when a
    /// reopen was deferred during the drain.
    pub fn settle(&mut self) {
        if let GateState::Draining { reopen } = self.state {
            self.state = if reopen {
                GateState::Open
            } else {
                GateState::Closed
            };
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}
