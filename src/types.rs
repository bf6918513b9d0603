//! Core value types: touch regions, touch samples and on-screen messages.

use palette::Srgb;

/// One quadrant of the touch surface.
///
/// Each region is bound to a fixed display color and an index 0-3. The index
/// order matches the quadrant formula in [`region_for_point`]: row-major from
/// the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// Index 0, red.
    TopLeft,
    /// Index 1, yellow.
    TopRight,
    /// Index 2, blue.
    BottomLeft,
    /// Index 3, green.
    BottomRight,
}

impl Region {
    /// Number of regions on the surface.
    pub const COUNT: usize = 4;

    /// All regions in index order.
    pub const ALL: [Region; Region::COUNT] = [
        Region::TopLeft,
        Region::TopRight,
        Region::BottomLeft,
        Region::BottomRight,
    ];

    /// Returns the region's index (0-3).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Region::TopLeft => 0,
            Region::TopRight => 1,
            Region::BottomLeft => 2,
            Region::BottomRight => 3,
        }
    }

    /// Returns the region for an index, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<Region> {
        Region::ALL.get(index).copied()
    }

    /// Returns the display color bound to this region.
    pub fn color(self) -> Srgb {
        match self {
            Region::TopLeft => Srgb::new(1.0, 0.0, 0.0),
            Region::TopRight => Srgb::new(1.0, 1.0, 0.0),
            Region::BottomLeft => Srgb::new(0.0, 0.0, 1.0),
            Region::BottomRight => Srgb::new(0.0, 1.0, 0.0),
        }
    }
}

/// A sampled touch point as reported by the touch controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    /// Horizontal coordinate in pixels.
    pub x: u16,
    /// Vertical coordinate in pixels.
    pub y: u16,
    /// Relative touch pressure.
    pub pressure: u8,
}

impl TouchPoint {
    /// Creates a touch point.
    #[inline]
    pub fn new(x: u16, y: u16, pressure: u8) -> Self {
        Self { x, y, pressure }
    }
}

/// Maps a touch point to the quadrant it falls in.
///
/// Quadrant index is `2 * (y > height / 2) + (x > width / 2)`.
pub fn region_for_point(point: TouchPoint, width: u16, height: u16) -> Region {
    let right = point.x > width / 2;
    let bottom = point.y > height / 2;
    match (bottom, right) {
        (false, false) => Region::TopLeft,
        (false, true) => Region::TopRight,
        (true, false) => Region::BottomLeft,
        (true, true) => Region::BottomRight,
    }
}

/// A status message the game wants shown on screen.
///
/// Produced by the supervisor; how it is rendered is up to the
/// [`Canvas`](crate::display::Canvas) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    /// Title screen: invite the player to touch to start.
    Intro,
    /// Full sequence repeated correctly.
    Congratulations,
    /// Invite the player to touch for the next level.
    NewLevelPrompt,
    /// Longest successfully repeated sequence this session.
    Score(u16),
}
