//! The canvas adapter trait.
//!
//! # Coordinate system
//!
//! Positions are integer pixels with the origin at the top-left; x grows
//! rightward, y grows downward. Headings are integer degrees normalized to
//! `[0, 360)`; a heading of `θ` moves the cursor along
//! `(cos θ, sin θ)` per unit of distance.
//!
//! # Drawing model
//!
//! Only [`forward`](Canvas::forward) and [`line_to`](Canvas::line_to)
//! produce visible output, and only while the pen is down. Cursor
//! relocation ([`set_position`](Canvas::set_position)) never draws.

use crate::color::Color;

/// Heading of the default pose, pointing along the canvas.
pub const DEFAULT_HEADING: i32 = 180;

/// Surface the interpreter draws through.
///
/// Implement this trait to adapt a concrete rendering target (a widget,
/// an image buffer, a test recorder). Implementations hold the full turtle
/// state: position, heading, pen color, pen-down flag and stroke width.
pub trait Canvas {
    /// Current cursor position.
    fn position(&self) -> (i32, i32);

    /// Relocate the cursor without drawing.
    fn set_position(&mut self, x: i32, y: i32);

    /// Current heading in degrees, normalized to `[0, 360)`.
    fn heading(&self) -> i32;

    /// Point the cursor at an absolute heading (normalized on store).
    fn set_heading(&mut self, degrees: i32);

    /// Rotate the heading by a signed delta, normalized on store.
    fn turn(&mut self, delta: i32);

    /// Move along the current heading by a signed distance, drawing a
    /// segment iff the pen is down.
    fn forward(&mut self, distance: i32);

    /// Draw a segment from the cursor to `(x, y)` iff the pen is down,
    /// then move the cursor there.
    fn line_to(&mut self, x: i32, y: i32);

    /// Pixel bounds as `(width, height)`.
    fn bounds(&self) -> (i32, i32);

    /// Current pen color.
    fn pen_color(&self) -> Color;

    /// Set the pen color.
    fn set_pen_color(&mut self, color: Color);

    /// Whether the pen is down.
    fn pen_down(&self) -> bool;

    /// Raise or lower the pen.
    fn set_pen_down(&mut self, down: bool);

    /// Current stroke width.
    fn stroke_width(&self) -> i32;

    /// Set the stroke width for subsequent segments.
    fn set_stroke_width(&mut self, width: i32);

    /// Erase all drawn output. Cursor and pen state are untouched.
    fn clear(&mut self);

    /// Return the cursor to the default pose (canvas center, heading 180)
    /// and lower the pen. Pen color and stroke width are untouched.
    fn reset(&mut self);
}
