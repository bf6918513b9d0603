//! Single-touch detection: debounces one press-then-release cycle and
//! reports which region was touched.

use crate::display::{Canvas, TouchScreen};
use crate::interlock::Gate;
use crate::types::{Region, region_for_point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum DetectorState {
    /// Waiting to be enabled.
    Idle,
    /// Armed; waiting for the surface to be touched.
    AwaitTouch,
    /// Touched; waiting out the analog settle delay before sampling.
    Settle,
    /// Region sampled and lit; waiting for the touch to end.
    AwaitRelease,
    /// Full press-release cycle latched; waiting to be disabled.
    Done,
}

/// Detects one press-then-release cycle on the touch surface.
///
/// Enabled and disabled through the interlock gate; the gate is sampled only
/// on the `Idle` and `Done` boundary transitions. There is no timeout here:
/// once armed, the machine waits indefinitely for a touch and then for its
/// release. The verifier layers its per-symbol timeout on top by disabling
/// and re-enabling this machine.
#[derive(Debug)]
pub struct TouchRegionDetector {
    state: DetectorState,
    gate: Gate,
    settle_ticks: u32,
    settle_counter: u32,
    pressed_region: Option<Region>,
    released: bool,
}

impl TouchRegionDetector {
    /// Creates an idle detector with the given analog settle delay in ticks.
    pub fn new(settle_ticks: u32) -> Self {
        Self {
            state: DetectorState::Idle,
            gate: Gate::new(),
            settle_ticks,
            settle_counter: 0,
            pressed_region: None,
            released: false,
        }
    }

    /// Arms the detector for one press-release cycle.
    pub fn enable(&mut self) {
        self.gate.enable();
    }

    /// Releases the detector back to idle (observed at its next boundary
    /// transition).
    pub fn disable(&mut self) {
        self.gate.disable();
    }

    /// The touched region, once a full press-then-release cycle has
    /// completed. Latched until the machine is disabled and drains to idle.
    pub fn released_region(&self) -> Option<Region> {
        if self.released { self.pressed_region } else { None }
    }

    /// True while the machine sits in its idle state.
    pub fn is_idle(&self) -> bool {
        self.state == DetectorState::Idle
    }

    /// Advances the machine by one tick.
    pub fn tick<T: TouchScreen, C: Canvas>(&mut self, screen: &mut T, canvas: &mut C) {
        // Current-state actions
        if self.state == DetectorState::Settle {
            self.settle_counter += 1;
        }

        // State transitions
        match self.state {
            DetectorState::Idle => {
                if self.gate.is_open() {
                    self.state = DetectorState::AwaitTouch;
                }
            }
            DetectorState::AwaitTouch => {
                if screen.is_touched() {
                    screen.clear_old_touch_data();
                    self.settle_counter = 0;
                    self.state = DetectorState::Settle;
                }
            }
            DetectorState::Settle => {
                if self.settle_counter == self.settle_ticks {
                    let point = screen.touched_point();
                    let region = region_for_point(point, screen.width(), screen.height());
                    self.pressed_region = Some(region);
                    canvas.light_region(region);
                    self.state = DetectorState::AwaitRelease;
                }
            }
            DetectorState::AwaitRelease => {
                if !screen.is_touched() {
                    if let Some(region) = self.pressed_region {
                        canvas.dim_region(region);
                        canvas.draw_button(region);
                    }
                    self.released = true;
                    self.state = DetectorState::Done;
                }
            }
            DetectorState::Done => {
                if !self.gate.is_open() {
                    self.gate.settle();
                    // Drop the latch before the next activation so a re-armed
                    // detector can never re-report a stale release.
                    self.released = false;
                    self.pressed_region = None;
                    self.state = DetectorState::Idle;
                }
            }
        }
    }
}
