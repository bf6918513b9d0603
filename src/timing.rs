//! Gameplay durations expressed in ticks.
//!
//! The system's only unit of time is the global tick: one fixed-period call to
//! every active state machine. Durations are configured in wall-clock
//! milliseconds and converted to tick counts once, up front. Each timed state
//! resets a counter on entry, increments it once per tick and compares it for
//! *equality* against the target count, so a conversion result of zero would
//! make that state wait forever; [`duration_ticks`] therefore never returns
//! zero.

const SETTLE_MS: u32 = 100;
const FLASH_MS: u32 = 500;
const PAUSE_MS: u32 = 500;
const CONGRATS_MS: u32 = 1_000;
const NEW_LEVEL_TIMEOUT_MS: u32 = 5_000;
const SCORE_MS: u32 = 4_000;
const TOUCH_TIMEOUT_MS: u32 = 3_000;

/// Converts a wall-clock duration to a tick count for a given tick period.
///
/// Rounds up, and clamps to at least one tick.
pub const fn duration_ticks(duration_ms: u32, tick_period_ms: u32) -> u32 {
    let ticks = duration_ms.div_ceil(tick_period_ms);
    if ticks == 0 { 1 } else { ticks }
}

/// All gameplay durations, in ticks.
///
/// Build one with [`GameTiming::from_tick_period_ms`] for production timing,
/// or construct the fields directly for tests that want short waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameTiming {
    /// Analog settle delay between touch detection and point sampling.
    pub settle: u32,
    /// How long each sequence entry stays lit during playback.
    pub flash: u32,
    /// Pause between touch release and the start of playback.
    pub pause: u32,
    /// How long the congratulations message stays up.
    pub congrats: u32,
    /// How long to wait for a touch on the new-level prompt.
    pub new_level_timeout: u32,
    /// How long the score screen stays up.
    pub score: u32,
    /// Per-symbol window for the player to complete a touch during
    /// verification.
    pub touch_timeout: u32,
}

impl GameTiming {
    /// Derives the standard gameplay timing from the scheduler's tick period.
    ///
    /// `tick_period_ms` must be non-zero.
    pub const fn from_tick_period_ms(tick_period_ms: u32) -> Self {
        Self {
            settle: duration_ticks(SETTLE_MS, tick_period_ms),
            flash: duration_ticks(FLASH_MS, tick_period_ms),
            pause: duration_ticks(PAUSE_MS, tick_period_ms),
            congrats: duration_ticks(CONGRATS_MS, tick_period_ms),
            new_level_timeout: duration_ticks(NEW_LEVEL_TIMEOUT_MS, tick_period_ms),
            score: duration_ticks(SCORE_MS, tick_period_ms),
            touch_timeout: duration_ticks(TOUCH_TIMEOUT_MS, tick_period_ms),
        }
    }
}
