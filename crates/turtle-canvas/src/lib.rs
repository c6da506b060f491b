//! Canvas layer for turtle graphics.
//!
//! This crate provides the drawing surface abstraction:
//! - `color` - RGB pen colors with named constants and HSB conversion
//! - `canvas` - the [`Canvas`] adapter trait the interpreter draws through
//! - `buffer` - [`BufferCanvas`], an in-memory segment-recording canvas
//!
//! The interpreter never talks to a concrete surface; it drives a
//! `&mut dyn Canvas`, so tests and headless hosts run against
//! [`BufferCanvas`] while a GUI host can adapt its own widget.

pub mod buffer;
pub mod canvas;
pub mod color;

pub use buffer::{BufferCanvas, CanvasConfig, Segment};
pub use canvas::{Canvas, DEFAULT_HEADING};
pub use color::Color;
