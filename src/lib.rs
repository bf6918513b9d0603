#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Game`**: the wired-up network of state machines; tick it once per fixed period
//! - **`GameSupervisor`**: game-level progression (levels, score, messages)
//! - **`SequencePlayer`**: timed playback of the active sequence prefix
//! - **`SequenceVerifier`**: checks the player's touches against the sequence
//! - **`TouchRegionDetector`**: debounces one press-release cycle into a `Region`
//! - **`SequenceStore`**: the shared, fixed-capacity level sequence
//! - **`Gate`**: the two-phase enable interlock between supervisor and subordinate
//! - **`TouchScreen` / `Canvas` / `Surface` / `SeedTimer`**: traits to implement for
//!   your hardware
//!
//! All timing is in ticks: one tick is one call into the network per fixed
//! scheduler period, and `GameTiming` converts wall-clock durations to tick
//! counts. Colors are `palette::Srgb` (0.0-1.0 range); convert them to your
//! display's native format in your `Surface` implementation.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod detector;
pub mod display;
pub mod game;
pub mod interlock;
pub mod player;
pub mod store;
pub mod supervisor;
pub mod timer;
pub mod timing;
pub mod types;
pub mod verifier;

pub use detector::TouchRegionDetector;
pub use display::{BACKGROUND, Canvas, Surface, SurfacePainter, TEXT_COLOR, TouchScreen};
pub use game::Game;
pub use interlock::Gate;
pub use player::SequencePlayer;
pub use store::SequenceStore;
pub use supervisor::{GamePhase, GameSupervisor, LEVEL_GROWTH, STARTING_SEQUENCE_LENGTH};
pub use timer::{SeedTimer, TimerError};
pub use timing::{GameTiming, duration_ticks};
pub use types::{Message, Region, TouchPoint, region_for_point};
