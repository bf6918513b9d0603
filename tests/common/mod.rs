#![allow(dead_code)]

use simon_core::{Canvas, Message, Region, SeedTimer, TimerError, TouchPoint, TouchScreen};

pub const SCREEN_WIDTH: u16 = 240;
pub const SCREEN_HEIGHT: u16 = 320;

/// A point safely inside the given quadrant of the mock screen.
pub fn point_for_region(region: Region) -> TouchPoint {
    match region {
        Region::TopLeft => TouchPoint::new(10, 10, 1),
        Region::TopRight => TouchPoint::new(SCREEN_WIDTH - 10, 10, 1),
        Region::BottomLeft => TouchPoint::new(10, SCREEN_HEIGHT - 10, 1),
        Region::BottomRight => TouchPoint::new(SCREEN_WIDTH - 10, SCREEN_HEIGHT - 10, 1),
    }
}

/// Scriptable touch screen: tests press and release it between ticks.
pub struct MockScreen {
    pub touched: bool,
    pub point: TouchPoint,
}

impl MockScreen {
    pub fn new() -> Self {
        Self {
            touched: false,
            point: TouchPoint::new(0, 0, 0),
        }
    }

    pub fn press(&mut self, region: Region) {
        self.point = point_for_region(region);
        self.touched = true;
    }

    pub fn release(&mut self) {
        self.touched = false;
    }
}

impl TouchScreen for MockScreen {
    fn is_touched(&self) -> bool {
        self.touched
    }

    fn touched_point(&mut self) -> TouchPoint {
        self.point
    }

    fn clear_old_touch_data(&mut self) {}

    fn width(&self) -> u16 {
        SCREEN_WIDTH
    }

    fn height(&self) -> u16 {
        SCREEN_HEIGHT
    }
}

/// One semantic draw call observed by the [`MockCanvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasOp {
    Light(Region),
    Dim(Region),
    DrawButton(Region),
    EraseButton(Region),
    Show(Message),
    Erase(Message),
}

/// Records every draw call in order.
pub struct MockCanvas {
    pub ops: Vec<CanvasOp>,
}

impl MockCanvas {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// The most recently shown, not yet erased message, if any.
    pub fn visible_message(&self) -> Option<Message> {
        let mut visible = None;
        for op in &self.ops {
            match *op {
                CanvasOp::Show(message) => visible = Some(message),
                CanvasOp::Erase(message) if visible == Some(message) => visible = None,
                _ => {}
            }
        }
        visible
    }

    /// All playback flashes (lit regions) in order.
    pub fn flashes(&self) -> Vec<Region> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Light(region) => Some(*region),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for MockCanvas {
    fn light_region(&mut self, region: Region) {
        self.ops.push(CanvasOp::Light(region));
    }

    fn dim_region(&mut self, region: Region) {
        self.ops.push(CanvasOp::Dim(region));
    }

    fn draw_button(&mut self, region: Region) {
        self.ops.push(CanvasOp::DrawButton(region));
    }

    fn erase_button(&mut self, region: Region) {
        self.ops.push(CanvasOp::EraseButton(region));
    }

    fn show_message(&mut self, message: Message) {
        self.ops.push(CanvasOp::Show(message));
    }

    fn erase_message(&mut self, message: Message) {
        self.ops.push(CanvasOp::Erase(message));
    }
}

/// Free-running seed timer stub; `ticks` is whatever the test set it to.
pub struct MockTimer {
    pub running: bool,
    pub init_calls: u32,
    pub seed: u32,
}

impl MockTimer {
    pub fn new(seed: u32) -> Self {
        Self {
            running: false,
            init_calls: 0,
            seed,
        }
    }
}

impl SeedTimer for MockTimer {
    fn init(&mut self) -> Result<(), TimerError> {
        self.init_calls += 1;
        Ok(())
    }

    fn reset(&mut self) {
        // Hardware would restart its count; the stub keeps the scripted value
        // so tests control the sequence seed.
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn ticks(&self) -> u32 {
        self.seed
    }
}
