//! The turtle command interpreter.
//!
//! This crate turns text lines into validated canvas operations:
//! - `command` - the parsed [`Command`] type and the name-dispatch table
//! - `interp` - [`Interpreter`], applying commands against a canvas
//! - `fractal` - the recursive fractal tree
//! - `error` - the [`CommandError`] rejection taxonomy
//!
//! The contract is explicit-result, no exceptions across the boundary:
//! `interpret` returns the confirmation message or a [`CommandError`], and
//! a rejected line is guaranteed to be a no-op on the canvas.

pub mod command;
pub mod error;
pub mod fractal;
pub mod interp;

pub use command::{Command, CommandSpec, StoreKind, TriangleArgs, COMMANDS, lookup, parse_line};
pub use error::CommandError;
pub use interp::{HostAction, Interpreter, Outcome};
