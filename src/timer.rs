//! Hardware interval-timer capability.
//!
//! The game never times anything with this timer; gameplay timing is counted
//! in ticks. Its only job is to supply an unpredictable tick count for
//! seeding the random sequence generator.

/// A free-running hardware interval timer.
///
/// Implement this for one hardware timer instance; the handle itself
/// identifies the timer.
pub trait SeedTimer {
    /// Initializes the timer hardware. Must be called before anything else.
    fn init(&mut self) -> Result<(), TimerError>;

    /// Loads zero into the counter. Does not stop a running timer.
    fn reset(&mut self);

    /// Starts counting.
    fn start(&mut self);

    /// Pauses counting.
    fn stop(&mut self);

    /// Current counter value in hardware ticks.
    fn ticks(&self) -> u32;
}

/// Errors reported by the timer hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// The timer hardware failed to initialize.
    InitFailed,
}

impl core::fmt::Display for TimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimerError::InitFailed => write!(f, "interval timer failed to initialize"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimerError {}
