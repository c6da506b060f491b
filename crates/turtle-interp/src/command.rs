//! Parsed commands and the name-dispatch table.
//!
//! A command line is whitespace-tokenized; the first token is the
//! case-insensitive command name, the rest are positional arguments.
//! [`COMMANDS`] maps each name to a descriptor carrying its parse function
//! and classification flags, so dispatch is a single table lookup and every
//! command's validation is testable in isolation.
//!
//! All *static* validation (arity, integer parsing, inclusive ranges, the
//! triangle inequality) happens here, before any canvas state is read or
//! written. The bounds check for moves depends on live canvas state and
//! lives in the interpreter.

use smallvec::SmallVec;
use turtle_canvas::Color;

use crate::error::CommandError;
use crate::fractal::MAX_DEPTH;

/// Which persistence target a `save`/`load` line names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// The rendered bitmap.
    Image,
    /// The session command log.
    Commands,
}

/// Triangle argument forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleArgs {
    /// One side length, 120° turns.
    Equilateral(i32),
    /// Three side lengths satisfying the strict triangle inequality.
    Scalene(i32, i32, i32),
}

/// A fully validated command, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left(i32),
    Right(i32),
    Forward(i32),
    Reverse(i32),
    Circle(i32),
    Square(i32),
    Triangle(TriangleArgs),
    Pen(Color),
    PenWidth(i32),
    PenUp,
    PenDown,
    Reset,
    Clear,
    Dance(i32),
    FractalTree(i32),
    Save(StoreKind),
    Load(StoreKind),
    About,
}

/// Table entry describing one named operation.
pub struct CommandSpec {
    /// Primary name, lowercase.
    pub name: &'static str,
    /// Alternate names accepted for the same operation.
    pub aliases: &'static [&'static str],
    /// Drawing command: participates in the one-shot pen bootstrap and
    /// marks the drawing as unsaved.
    pub drawing: bool,
    /// Eligible for the drawing history (replayed by undo).
    pub history: bool,
    parse: fn(&[&str]) -> Result<Command, CommandError>,
}

impl CommandSpec {
    /// Validate the argument tokens into a [`Command`].
    pub fn parse_args(&self, args: &[&str]) -> Result<Command, CommandError> {
        (self.parse)(args)
    }
}

/// Find the descriptor for a lowercase command name.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|spec| spec.name == name || spec.aliases.contains(&name))
}

/// Tokenize and validate one command line.
///
/// Returns the parsed command together with its table descriptor, or the
/// rejection. The canvas is never involved; callers apply separately.
pub fn parse_line(line: &str) -> Result<(Command, &'static CommandSpec), CommandError> {
    let trimmed = line.trim();
    let tokens: SmallVec<[&str; 4]> = trimmed.split_whitespace().collect();
    let name = match tokens.first() {
        Some(token) => token.to_lowercase(),
        None => return Err(CommandError::Unknown(trimmed.to_string())),
    };
    let spec = lookup(&name).ok_or_else(|| CommandError::Unknown(trimmed.to_string()))?;
    let command = spec.parse_args(&tokens[1..])?;
    Ok((command, spec))
}

/// All named operations. Unlisted trailing tokens are ignored except where
/// a parse function enforces an exact count (`pen`, `triangle`).
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "about",
        aliases: &[],
        drawing: false,
        history: false,
        parse: |_| Ok(Command::About),
    },
    CommandSpec {
        name: "penup",
        aliases: &[],
        drawing: false,
        history: false,
        parse: |_| Ok(Command::PenUp),
    },
    CommandSpec {
        name: "pendown",
        aliases: &[],
        drawing: false,
        history: false,
        parse: |_| Ok(Command::PenDown),
    },
    CommandSpec {
        name: "left",
        aliases: &[],
        drawing: true,
        history: false,
        parse: parse_left,
    },
    CommandSpec {
        name: "right",
        aliases: &[],
        drawing: true,
        history: false,
        parse: parse_right,
    },
    CommandSpec {
        name: "forward",
        aliases: &["move"],
        drawing: true,
        history: true,
        parse: parse_forward,
    },
    CommandSpec {
        name: "reverse",
        aliases: &[],
        drawing: true,
        history: true,
        parse: parse_reverse,
    },
    CommandSpec {
        name: "reset",
        aliases: &[],
        drawing: true,
        history: false,
        parse: |_| Ok(Command::Reset),
    },
    CommandSpec {
        name: "clear",
        aliases: &[],
        drawing: false,
        history: false,
        parse: |_| Ok(Command::Clear),
    },
    CommandSpec {
        name: "red",
        aliases: &[],
        drawing: true,
        history: false,
        parse: |_| Ok(Command::Pen(Color::RED)),
    },
    CommandSpec {
        name: "green",
        aliases: &[],
        drawing: true,
        history: false,
        parse: |_| Ok(Command::Pen(Color::GREEN)),
    },
    CommandSpec {
        name: "white",
        aliases: &[],
        drawing: true,
        history: false,
        parse: |_| Ok(Command::Pen(Color::WHITE)),
    },
    CommandSpec {
        name: "orange",
        aliases: &[],
        drawing: true,
        history: false,
        parse: |_| Ok(Command::Pen(Color::ORANGE)),
    },
    CommandSpec {
        name: "pink",
        aliases: &[],
        drawing: true,
        history: false,
        parse: |_| Ok(Command::Pen(Color::PINK)),
    },
    CommandSpec {
        name: "cyan",
        aliases: &[],
        drawing: true,
        history: false,
        parse: |_| Ok(Command::Pen(Color::CYAN)),
    },
    CommandSpec {
        name: "dance",
        aliases: &[],
        drawing: true,
        history: false,
        parse: parse_dance,
    },
    CommandSpec {
        name: "circle",
        aliases: &[],
        drawing: true,
        history: true,
        parse: parse_circle,
    },
    CommandSpec {
        name: "square",
        aliases: &[],
        drawing: true,
        history: true,
        parse: parse_square,
    },
    CommandSpec {
        name: "pen",
        aliases: &[],
        drawing: true,
        history: false,
        parse: parse_pen,
    },
    CommandSpec {
        name: "penwidth",
        aliases: &[],
        drawing: false,
        history: false,
        parse: parse_pen_width,
    },
    CommandSpec {
        name: "triangle",
        aliases: &[],
        drawing: true,
        history: true,
        parse: parse_triangle,
    },
    CommandSpec {
        name: "fractal",
        aliases: &[],
        drawing: true,
        history: true,
        parse: parse_fractal,
    },
    CommandSpec {
        name: "save",
        aliases: &[],
        drawing: false,
        history: false,
        parse: parse_save,
    },
    CommandSpec {
        name: "load",
        aliases: &[],
        drawing: false,
        history: false,
        parse: parse_load,
    },
];

// ============================================================================
// Parse functions
// ============================================================================

fn parse_turn(args: &[&str], left: bool) -> Result<Command, CommandError> {
    let degrees = match args.first() {
        None => 90,
        Some(raw) => raw.parse::<i32>().map_err(|_| {
            CommandError::MalformedArgument("Error: Degree must be a number".into())
        })?,
    };
    if !(0..=360).contains(&degrees) {
        return Err(CommandError::OutOfRange(
            "Turn between 0 and 360 degree.".into(),
        ));
    }
    Ok(if left {
        Command::Left(degrees)
    } else {
        Command::Right(degrees)
    })
}

fn parse_left(args: &[&str]) -> Result<Command, CommandError> {
    parse_turn(args, true)
}

fn parse_right(args: &[&str]) -> Result<Command, CommandError> {
    parse_turn(args, false)
}

fn parse_distance(args: &[&str]) -> Result<i32, CommandError> {
    let raw = args.first().ok_or_else(|| {
        CommandError::MissingArgument(
            "Error: 'move or reverse' command requires a distance parameter.".into(),
        )
    })?;
    let distance = raw
        .parse::<i32>()
        .map_err(|_| CommandError::MalformedArgument("Distance must be a number".into()))?;
    if distance < 0 {
        return Err(CommandError::OutOfRange(
            "Error: Distance must be a positive value.".into(),
        ));
    }
    Ok(distance)
}

fn parse_forward(args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::Forward(parse_distance(args)?))
}

fn parse_reverse(args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::Reverse(parse_distance(args)?))
}

fn parse_circle(args: &[&str]) -> Result<Command, CommandError> {
    let radius = args
        .first()
        .and_then(|raw| raw.parse::<i32>().ok())
        .ok_or_else(|| CommandError::MalformedArgument("Invalid circle radius.".into()))?;
    if !(1..=500).contains(&radius) {
        return Err(CommandError::OutOfRange(
            "Radius must be between 1 and 500.".into(),
        ));
    }
    Ok(Command::Circle(radius))
}

fn parse_square(args: &[&str]) -> Result<Command, CommandError> {
    let raw = args.first().ok_or_else(|| {
        CommandError::MissingArgument(
            "Error: 'square' command requires a length parameter.".into(),
        )
    })?;
    let length = raw
        .parse::<i32>()
        .map_err(|_| CommandError::MalformedArgument("Error: Invalid length parameter.".into()))?;
    if length <= 0 {
        return Err(CommandError::OutOfRange(
            "Error: Length must be positive.".into(),
        ));
    }
    Ok(Command::Square(length))
}

fn parse_triangle(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        [size] => {
            let size = size.parse::<i32>().map_err(|_| {
                CommandError::MalformedArgument("Invalid number format for triangle size.".into())
            })?;
            Ok(Command::Triangle(TriangleArgs::Equilateral(size)))
        }
        [a, b, c] => {
            let side = |raw: &str| {
                raw.parse::<i32>().map_err(|_| {
                    CommandError::MalformedArgument(
                        "Invalid number format in triangle sides.".into(),
                    )
                })
            };
            let (a, b, c) = (side(a)?, side(b)?, side(c)?);
            if !is_triangle(a, b, c) {
                return Err(CommandError::Geometry("Error in triangle parameters.".into()));
            }
            Ok(Command::Triangle(TriangleArgs::Scalene(a, b, c)))
        }
        _ => Err(CommandError::MissingArgument(
            "Invalid triangle command. Usage: triangle <size> or triangle <a> <b> <c>".into(),
        )),
    }
}

/// Strict triangle inequality on positive sides.
fn is_triangle(a: i32, b: i32, c: i32) -> bool {
    let (a, b, c) = (i64::from(a), i64::from(b), i64::from(c));
    a > 0 && b > 0 && c > 0 && a + b > c && a + c > b && b + c > a
}

fn parse_pen(args: &[&str]) -> Result<Command, CommandError> {
    if args.len() != 3 {
        return Err(CommandError::MissingArgument(
            "Invalid pen command. Usage: pen <r> <g> <b>".into(),
        ));
    }
    let mut channels = [0u8; 3];
    for (slot, raw) in channels.iter_mut().zip(args) {
        let value = raw.parse::<i32>().map_err(|_| {
            CommandError::MalformedArgument("Invalid RGB values. Use numbers 0-255.".into())
        })?;
        if !(0..=255).contains(&value) {
            return Err(CommandError::OutOfRange(
                "Invalid RGB values. Use numbers 0-255.".into(),
            ));
        }
        *slot = value as u8;
    }
    Ok(Command::Pen(Color::rgb(channels[0], channels[1], channels[2])))
}

fn parse_pen_width(args: &[&str]) -> Result<Command, CommandError> {
    let width = args
        .first()
        .and_then(|raw| raw.parse::<i32>().ok())
        .ok_or_else(|| CommandError::MalformedArgument("Invalid pen width.".into()))?;
    if !(1..=50).contains(&width) {
        return Err(CommandError::OutOfRange(
            "Pen width must be between 1 and 50.".into(),
        ));
    }
    Ok(Command::PenWidth(width))
}

fn parse_dance(args: &[&str]) -> Result<Command, CommandError> {
    let count = args
        .first()
        .and_then(|raw| raw.parse::<i32>().ok())
        .ok_or_else(|| CommandError::MalformedArgument("Invalid dance parameter.".into()))?;
    if !(1..=100).contains(&count) {
        return Err(CommandError::OutOfRange(
            "Dance moves must be between 1 and 100.".into(),
        ));
    }
    Ok(Command::Dance(count))
}

fn parse_fractal(args: &[&str]) -> Result<Command, CommandError> {
    if args.len() < 2 {
        return Err(CommandError::MissingArgument(
            "Usage: fractal tree <depth>".into(),
        ));
    }
    let depth = args[1].parse::<i32>().map_err(|_| {
        CommandError::MalformedArgument("Fractal depth must be a number.".into())
    })?;
    if !args[0].eq_ignore_ascii_case("tree") {
        return Err(CommandError::MalformedArgument(
            "Unknown fractal type. Use: tree".into(),
        ));
    }
    if !(0..=MAX_DEPTH).contains(&depth) {
        return Err(CommandError::OutOfRange(format!(
            "Fractal depth must be between 0 and {MAX_DEPTH}."
        )));
    }
    Ok(Command::FractalTree(depth))
}

fn parse_save(args: &[&str]) -> Result<Command, CommandError> {
    let target = args.first().ok_or_else(|| {
        CommandError::MissingArgument("Error: Save what? Usage: save image or save commands".into())
    })?;
    match target.to_lowercase().as_str() {
        "image" => Ok(Command::Save(StoreKind::Image)),
        "commands" => Ok(Command::Save(StoreKind::Commands)),
        _ => Err(CommandError::MalformedArgument(
            "Unknown save option. Use: save image OR save commands".into(),
        )),
    }
}

fn parse_load(args: &[&str]) -> Result<Command, CommandError> {
    let target = args.first().ok_or_else(|| {
        CommandError::MissingArgument("Error: Load what? Usage: load image or load commands".into())
    })?;
    match target.to_lowercase().as_str() {
        "image" => Ok(Command::Load(StoreKind::Image)),
        "commands" => Ok(Command::Load(StoreKind::Commands)),
        _ => Err(CommandError::MalformedArgument(
            "Unknown load option. Use: load image OR load commands".into(),
        )),
    }
}
