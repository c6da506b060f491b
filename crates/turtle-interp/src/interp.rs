//! Command interpretation against a canvas.
//!
//! [`Interpreter::interpret`] takes one text line, validates it through the
//! command table, applies it to the canvas, and returns an explicit
//! accepted/rejected result. Rejection never mutates the canvas: all static
//! validation happens before dispatch, and the only state-dependent check
//! (move bounds) runs before the move.

use turtle_canvas::{Canvas, Color, DEFAULT_HEADING};

use crate::command::{self, Command, StoreKind, TriangleArgs};
use crate::error::CommandError;
use crate::fractal;

/// x coordinate of the left-center anchor `clear` repositions to.
const CLEAR_ANCHOR_X: i32 = 30;

/// Chord count for the circle approximation.
const CIRCLE_STEPS: i32 = 36;

/// Persistence work a command defers to the host.
///
/// The interpreter validates `save`/`load` lines but owns no stores; the
/// session layer performs the returned action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    SaveImage,
    LoadImage,
    SaveCommands,
    LoadCommands,
}

/// A successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// User-facing confirmation, `"Last command: <text>"` for most
    /// operations.
    pub message: String,
    /// The command counts as a drawing command (dirty flag, bootstrap).
    pub drawing: bool,
    /// The command belongs in the drawing history.
    pub history: bool,
    /// Deferred persistence work, if any.
    pub host: Option<HostAction>,
}

/// The command interpreter.
///
/// Holds the one piece of cross-command state: whether the session's
/// one-shot pen bootstrap has fired. Everything else lives on the canvas.
#[derive(Debug, Default)]
pub struct Interpreter {
    first_drawing_done: bool,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret one command line against the canvas.
    ///
    /// On the first successful *drawing* command since construction (or
    /// since [`reset_bootstrap`](Self::reset_bootstrap)), the pen is forced
    /// to red with stroke width 1 after the command applies, so a replay
    /// from an empty canvas is deterministic regardless of ambient pen
    /// state.
    pub fn interpret(
        &mut self,
        line: &str,
        canvas: &mut dyn Canvas,
    ) -> Result<Outcome, CommandError> {
        let trimmed = line.trim();
        let result = self.dispatch(trimmed, canvas);
        match &result {
            Ok(_) => tracing::debug!(command = trimmed, "accepted"),
            Err(error) => tracing::warn!(command = trimmed, %error, "rejected"),
        }
        result
    }

    /// Re-arm the one-shot pen bootstrap (used by undo, clear-all and
    /// session load so their replays initialize the pen the same way a
    /// fresh session would).
    pub fn reset_bootstrap(&mut self) {
        self.first_drawing_done = false;
    }

    fn dispatch(
        &mut self,
        trimmed: &str,
        canvas: &mut dyn Canvas,
    ) -> Result<Outcome, CommandError> {
        let (parsed, spec) = command::parse_line(trimmed)?;
        let host = apply(&parsed, canvas)?;

        if spec.drawing && !self.first_drawing_done {
            canvas.set_pen_color(Color::RED);
            canvas.set_stroke_width(1);
            self.first_drawing_done = true;
        }

        let message = match parsed {
            Command::About => format!("Turtle graphics {}", env!("CARGO_PKG_VERSION")),
            _ => format!("Last command: {trimmed}"),
        };
        Ok(Outcome {
            message,
            drawing: spec.drawing,
            history: spec.history,
            host,
        })
    }
}

fn apply(command: &Command, canvas: &mut dyn Canvas) -> Result<Option<HostAction>, CommandError> {
    match *command {
        Command::Left(degrees) => canvas.turn(-degrees),
        Command::Right(degrees) => canvas.turn(degrees),
        Command::Forward(distance) => move_checked(canvas, distance, false)?,
        Command::Reverse(distance) => move_checked(canvas, distance, true)?,
        Command::Circle(radius) => draw_circle(canvas, radius),
        Command::Square(length) => draw_square(canvas, length),
        Command::Triangle(args) => draw_triangle(canvas, args),
        Command::Pen(color) => canvas.set_pen_color(color),
        Command::PenWidth(width) => canvas.set_stroke_width(width),
        Command::PenUp => canvas.set_pen_down(false),
        Command::PenDown => canvas.set_pen_down(true),
        Command::Reset => canvas.reset(),
        Command::Clear => clear_to_anchor(canvas),
        Command::Dance(count) => dance(canvas, count),
        Command::FractalTree(depth) => fractal::draw_tree(canvas, depth, fractal::TRUNK_LENGTH),
        Command::Save(StoreKind::Image) => return Ok(Some(HostAction::SaveImage)),
        Command::Save(StoreKind::Commands) => return Ok(Some(HostAction::SaveCommands)),
        Command::Load(StoreKind::Image) => return Ok(Some(HostAction::LoadImage)),
        Command::Load(StoreKind::Commands) => return Ok(Some(HostAction::LoadCommands)),
        Command::About => {}
    }
    Ok(None)
}

/// Bounds-checked move along (or against) the current heading.
///
/// The projected endpoint must stay inside `[0, width] x [0, height]`;
/// rejection happens before the canvas is touched.
fn move_checked(canvas: &mut dyn Canvas, distance: i32, reverse: bool) -> Result<(), CommandError> {
    let (x, y) = canvas.position();
    let (width, height) = canvas.bounds();
    let theta = f64::from(canvas.heading()).to_radians();
    let dx = (theta.cos() * f64::from(distance)).round() as i32;
    let dy = (theta.sin() * f64::from(distance)).round() as i32;
    let (nx, ny) = if reverse {
        (x - dx, y - dy)
    } else {
        (x + dx, y + dy)
    };
    if nx < 0 || ny < 0 || nx > width || ny > height {
        return Err(CommandError::Geometry("Move blocked: out of bounds.".into()));
    }
    canvas.forward(if reverse { -distance } else { distance });
    Ok(())
}

/// Chorded circle centered on the cursor.
///
/// The cursor relocates to the circumference (no draw), walks the chords,
/// and is restored; heading and pen state are untouched, so a raised pen
/// draws nothing.
fn draw_circle(canvas: &mut dyn Canvas, radius: i32) {
    let (cx, cy) = canvas.position();
    let point = |i: i32| {
        let angle = f64::from(i) * std::f64::consts::TAU / f64::from(CIRCLE_STEPS);
        (
            cx + (f64::from(radius) * angle.cos()).round() as i32,
            cy + (f64::from(radius) * angle.sin()).round() as i32,
        )
    };
    let (sx, sy) = point(0);
    canvas.set_position(sx, sy);
    for i in 1..=CIRCLE_STEPS {
        let (px, py) = point(i);
        canvas.line_to(px, py);
    }
    canvas.set_position(cx, cy);
}

/// Four sides turning left 90°; the pre-command pose is restored, so the
/// square is pose-neutral.
fn draw_square(canvas: &mut dyn Canvas, length: i32) {
    let (x, y) = canvas.position();
    let heading = canvas.heading();
    for _ in 0..4 {
        canvas.forward(length);
        canvas.turn(90);
    }
    canvas.set_position(x, y);
    canvas.set_heading(heading);
}

fn draw_triangle(canvas: &mut dyn Canvas, args: TriangleArgs) {
    match args {
        TriangleArgs::Equilateral(size) => {
            for _ in 0..3 {
                canvas.forward(size);
                canvas.turn(120);
            }
        }
        TriangleArgs::Scalene(a, b, c) => {
            let (deg_a, deg_b, deg_c) = interior_angles(a, b, c);
            canvas.forward(a);
            canvas.turn(180 - deg_c);
            canvas.forward(b);
            canvas.turn(180 - deg_a);
            canvas.forward(c);
            canvas.turn(180 - deg_b);
        }
    }
}

/// Interior angles opposite sides a, b, c via the law of cosines, rounded
/// to whole degrees.
fn interior_angles(a: i32, b: i32, c: i32) -> (i32, i32, i32) {
    let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
    let angle_a = ((b * b + c * c - a * a) / (2.0 * b * c)).acos();
    let angle_b = ((a * a + c * c - b * b) / (2.0 * a * c)).acos();
    let angle_c = std::f64::consts::PI - angle_a - angle_b;
    (
        angle_a.to_degrees().round() as i32,
        angle_b.to_degrees().round() as i32,
        angle_c.to_degrees().round() as i32,
    )
}

/// Erase the canvas and park the turtle at the left-center anchor.
fn clear_to_anchor(canvas: &mut dyn Canvas) {
    let (_, height) = canvas.bounds();
    canvas.clear();
    canvas.set_position(CLEAR_ANCHOR_X, height / 2);
    canvas.set_heading(DEFAULT_HEADING);
    canvas.set_pen_down(true);
}

/// Pose-preserving flourish: each beat wiggles the heading out and back.
fn dance(canvas: &mut dyn Canvas, count: i32) {
    for _ in 0..count {
        canvas.turn(45);
        canvas.turn(-90);
        canvas.turn(45);
    }
}
