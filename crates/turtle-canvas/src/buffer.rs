//! In-memory segment-recording canvas.

use crate::canvas::{Canvas, DEFAULT_HEADING};
use crate::color::Color;

/// Canvas dimensions.
#[derive(Clone, Copy, Debug)]
pub struct CanvasConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
        }
    }
}

/// One drawn line segment, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub color: Color,
    pub width: i32,
}

/// A [`Canvas`] that records drawn segments in order instead of rasterizing.
///
/// This is the canvas used by the console host and by every test: the
/// recorded segment list is the observable drawing, so two command
/// sequences produce the same picture exactly when they produce the same
/// segments.
#[derive(Clone, Debug)]
pub struct BufferCanvas {
    config: CanvasConfig,
    x: i32,
    y: i32,
    heading: i32,
    color: Color,
    width: i32,
    pen_down: bool,
    segments: Vec<Segment>,
}

impl BufferCanvas {
    /// Create a canvas with the given dimensions, in the default pose with
    /// the pen down, color red, stroke width 1.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            x: config.width / 2,
            y: config.height / 2,
            heading: DEFAULT_HEADING,
            color: Color::RED,
            width: 1,
            pen_down: true,
            segments: Vec::new(),
        }
    }

    /// The drawn segments, oldest first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Default for BufferCanvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

fn normalize(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

impl Canvas for BufferCanvas {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn heading(&self) -> i32 {
        self.heading
    }

    fn set_heading(&mut self, degrees: i32) {
        self.heading = normalize(degrees);
    }

    fn turn(&mut self, delta: i32) {
        self.heading = normalize(self.heading + delta);
    }

    fn forward(&mut self, distance: i32) {
        let theta = (self.heading as f64).to_radians();
        let dx = (theta.cos() * distance as f64).round() as i32;
        let dy = (theta.sin() * distance as f64).round() as i32;
        self.line_to(self.x + dx, self.y + dy);
    }

    fn line_to(&mut self, x: i32, y: i32) {
        if self.pen_down {
            self.segments.push(Segment {
                from: (self.x, self.y),
                to: (x, y),
                color: self.color,
                width: self.width,
            });
        }
        self.x = x;
        self.y = y;
    }

    fn bounds(&self) -> (i32, i32) {
        (self.config.width, self.config.height)
    }

    fn pen_color(&self) -> Color {
        self.color
    }

    fn set_pen_color(&mut self, color: Color) {
        self.color = color;
    }

    fn pen_down(&self) -> bool {
        self.pen_down
    }

    fn set_pen_down(&mut self, down: bool) {
        self.pen_down = down;
    }

    fn stroke_width(&self) -> i32 {
        self.width
    }

    fn set_stroke_width(&mut self, width: i32) {
        self.width = width;
    }

    fn clear(&mut self) {
        self.segments.clear();
    }

    fn reset(&mut self) {
        self.x = self.config.width / 2;
        self.y = self.config.height / 2;
        self.heading = DEFAULT_HEADING;
        self.pen_down = true;
    }
}
