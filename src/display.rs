//! Display and touch capability traits, plus the provided painter.
//!
//! The state machines never draw pixels. They read touches through
//! [`TouchScreen`] and emit semantic render operations into a [`Canvas`]:
//! "light this region", "show this message". How those operations turn into
//! pixels is the integrator's concern; [`SurfacePainter`] is the provided
//! implementation that maps them onto the raw drawing ops of a [`Surface`]
//! using the classic layout: four colored quadrants with a centered button
//! square in each, and centered status text.

use crate::types::{Message, Region, TouchPoint};
use core::fmt::Write as _;
use heapless::String;
use palette::Srgb;

/// Screen background (and erase) color.
pub const BACKGROUND: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Color used for status text.
pub const TEXT_COLOR: Srgb = Srgb::new(1.0, 1.0, 1.0);

// 6x8 glyph cell at text size 1; scaled linearly by the text size.
const GLYPH_WIDTH: i32 = 6;
const GLYPH_HEIGHT: i32 = 8;

const TEXT_SIZE_BIG: u8 = 6;
const TEXT_SIZE_MED: u8 = 4;
const TEXT_SIZE_SMALL: u8 = 2;

/// Touch input as sampled by the display's touch controller.
pub trait TouchScreen {
    /// True while the surface is being touched.
    fn is_touched(&self) -> bool;

    /// Returns the most recent touch sample.
    ///
    /// Only meaningful after the analog settle delay has elapsed since
    /// [`clear_old_touch_data`](TouchScreen::clear_old_touch_data).
    fn touched_point(&mut self) -> TouchPoint;

    /// Discards samples buffered from previous touches.
    fn clear_old_touch_data(&mut self);

    /// Touch surface width in pixels.
    fn width(&self) -> u16;

    /// Touch surface height in pixels.
    fn height(&self) -> u16;
}

/// Semantic render sink for the game's state machines.
///
/// Implementations decide how each operation is presented. [`SurfacePainter`]
/// renders them onto a raw [`Surface`]; tests record them.
pub trait Canvas {
    /// Fills `region`'s full quadrant with its color (a sequence flash, or
    /// press feedback).
    fn light_region(&mut self, region: Region);

    /// Restores `region`'s quadrant to the background.
    fn dim_region(&mut self, region: Region);

    /// Draws the small touch-target button centered in `region`.
    fn draw_button(&mut self, region: Region);

    /// Erases the button in `region`.
    fn erase_button(&mut self, region: Region);

    /// Shows a status message.
    fn show_message(&mut self, message: Message);

    /// Removes a previously shown status message.
    fn erase_message(&mut self, message: Message);
}

/// Raw drawing operations of the display driver (the excluded collaborator).
pub trait Surface {
    /// Display width in pixels.
    fn width(&self) -> u16;

    /// Display height in pixels.
    fn height(&self) -> u16;

    /// Fills a rectangle with a solid color.
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Srgb);

    /// Moves the text cursor.
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Sets the text scale (multiples of the 6x8 glyph cell).
    fn set_text_size(&mut self, size: u8);

    /// Sets the text foreground color.
    fn set_text_color(&mut self, color: Srgb);

    /// Prints one line of text at the cursor.
    fn print_line(&mut self, text: &str);
}

/// Renders [`Canvas`] operations onto a raw [`Surface`].
pub struct SurfacePainter<S: Surface> {
    surface: S,
}

impl<S: Surface> SurfacePainter<S> {
    /// Wraps a surface.
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Releases the wrapped surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn fill_quadrant(&mut self, region: Region, color: Srgb) {
        let w = self.surface.width();
        let h = self.surface.height();
        let x = if region.index() % 2 == 0 { 0 } else { w / 2 };
        let y = if region.index() < 2 { 0 } else { h / 2 };
        self.surface.fill_rect(x, y, w / 2, h / 2, color);
    }

    fn fill_button(&mut self, region: Region, color: Srgb) {
        let w = self.surface.width();
        let h = self.surface.height();
        let x = if region.index() % 2 == 0 {
            w / 8
        } else {
            w * 5 / 8
        };
        let y = if region.index() < 2 { h / 8 } else { h * 5 / 8 };
        self.surface.fill_rect(x, y, w / 4, h / 4, color);
    }

    /// Prints `text` horizontally centered at `y`. Returns the y position of
    /// the next line.
    fn text_line(&mut self, text: &str, size: u8, y: i32, color: Srgb) -> i32 {
        let width = i32::from(self.surface.width());
        let advance = GLYPH_WIDTH * i32::from(size);
        self.surface
            .set_cursor((width - advance * text.len() as i32) / 2, y);
        self.surface.set_text_color(color);
        self.surface.set_text_size(size);
        self.surface.print_line(text);
        y + GLYPH_HEIGHT * i32::from(size)
    }

    /// Prints `text` centered on both axes.
    fn text_centered(&mut self, text: &str, size: u8, color: Srgb) {
        let y = (i32::from(self.surface.height()) - GLYPH_HEIGHT * i32::from(size)) / 2;
        self.text_line(text, size, y, color);
    }

    fn paint_message(&mut self, message: Message, color: Srgb) {
        match message {
            Message::Intro => {
                let height = i32::from(self.surface.height());
                let block = GLYPH_HEIGHT * i32::from(TEXT_SIZE_BIG + TEXT_SIZE_SMALL);
                let y = (height - block) / 2;
                let y = self.text_line("Simon", TEXT_SIZE_BIG, y, color);
                self.text_line("Touch to start", TEXT_SIZE_SMALL, y, color);
            }
            Message::Congratulations => {
                self.text_centered("Yay!", TEXT_SIZE_MED, color);
            }
            Message::NewLevelPrompt => {
                self.text_centered("Touch for new level", TEXT_SIZE_SMALL, color);
            }
            Message::Score(score) => {
                let mut line: String<32> = String::new();
                // A u16 score always fits in 32 bytes.
                let _ = write!(line, "Longest Sequence: {}", score);
                self.text_centered(&line, TEXT_SIZE_SMALL, color);
            }
        }
    }
}

impl<S: Surface> Canvas for SurfacePainter<S> {
    fn light_region(&mut self, region: Region) {
        self.fill_quadrant(region, region.color());
    }

    fn dim_region(&mut self, region: Region) {
        self.fill_quadrant(region, BACKGROUND);
    }

    fn draw_button(&mut self, region: Region) {
        self.fill_button(region, region.color());
    }

    fn erase_button(&mut self, region: Region) {
        self.fill_button(region, BACKGROUND);
    }

    fn show_message(&mut self, message: Message) {
        self.paint_message(message, TEXT_COLOR);
    }

    fn erase_message(&mut self, message: Message) {
        // Erase by repainting the same layout in the background color.
        self.paint_message(message, BACKGROUND);
    }
}
