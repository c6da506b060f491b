//! Turtle session - drawing history, command log and undo.
//!
//! This crate provides the [`Session`] struct, the orchestrator tying the
//! interpreter, a canvas and the two ordered logs together:
//! - every accepted command is recorded for persistence (minus the
//!   reserved meta-commands),
//! - drawing commands are additionally recorded with their issue-time pen
//!   color for undo,
//! - undo reconstructs the canvas by replaying the shortened history from
//!   a fresh reset, never by inverting operations.
//!
//! # Quick Start
//!
//! ```
//! use turtle_canvas::BufferCanvas;
//! use turtle_session::Session;
//!
//! let mut session = Session::new(BufferCanvas::default());
//! session.execute("forward 50").unwrap();
//! session.execute("left 90").unwrap();
//!
//! // Turns are logged but only moves/shapes enter the drawing history.
//! assert_eq!(session.command_log().len(), 2);
//! assert_eq!(session.drawing_history().len(), 1);
//! ```

pub mod history;
pub mod store;

pub use history::{CommandLog, DrawingHistory, HistoryEntry, META_COMMANDS};
pub use store::{CommandStore, FileStore, ImageStore, MemoryStore, NullImageStore};

use turtle_canvas::Canvas;
use turtle_interp::{CommandError, HostAction, Interpreter};

/// A single-user drawing session.
///
/// One command is fully validated and applied before the next is accepted;
/// `&mut self` throughout makes the single-writer discipline structural.
/// Hosts with multiple input producers must serialize their calls.
pub struct Session<C: Canvas> {
    canvas: C,
    interp: Interpreter,
    history: DrawingHistory,
    log: CommandLog,
    drawing_unsaved: bool,
    commands_unsaved: bool,
    command_store: Box<dyn CommandStore>,
    image_store: Box<dyn ImageStore>,
}

impl<C: Canvas> Session<C> {
    /// Create a session with in-memory persistence (tests, embedded hosts).
    pub fn new(canvas: C) -> Self {
        Self::with_stores(canvas, Box::new(MemoryStore::new()), Box::new(NullImageStore))
    }

    /// Create a session with explicit persistence collaborators.
    pub fn with_stores(
        canvas: C,
        command_store: Box<dyn CommandStore>,
        image_store: Box<dyn ImageStore>,
    ) -> Self {
        Self {
            canvas,
            interp: Interpreter::new(),
            history: DrawingHistory::new(),
            log: CommandLog::new(),
            drawing_unsaved: false,
            commands_unsaved: false,
            command_store,
            image_store,
        }
    }

    // ========================================================================
    // Command execution
    // ========================================================================

    /// Execute one command line: interpret, perform any deferred
    /// persistence, and record into the logs.
    ///
    /// This is the single entry point for direct input and file replay
    /// alike. On rejection nothing is recorded and no state changes.
    pub fn execute(&mut self, line: &str) -> Result<String, CommandError> {
        let trimmed = line.trim();
        let color_before = self.canvas.pen_color();
        let outcome = self.interp.interpret(trimmed, &mut self.canvas)?;

        if let Some(action) = outcome.host {
            let message = self.perform(action)?;
            if self.log.record(trimmed) {
                self.commands_unsaved = true;
            }
            return Ok(message);
        }

        if outcome.history {
            self.history.push(trimmed, color_before);
        }
        if self.log.record(trimmed) {
            self.commands_unsaved = true;
        }
        if outcome.drawing {
            self.drawing_unsaved = true;
        }
        Ok(outcome.message)
    }

    fn perform(&mut self, action: HostAction) -> Result<String, CommandError> {
        match action {
            HostAction::SaveCommands => {
                self.command_store
                    .write_lines(self.log.lines())
                    .map_err(|error| {
                        tracing::error!(%error, "command save failed");
                        CommandError::Io("Failed to save commands.".into())
                    })?;
                self.commands_unsaved = false;
                Ok("Commands saved.".into())
            }
            HostAction::LoadCommands => {
                let lines = self.command_store.read_lines().map_err(|error| {
                    tracing::error!(%error, "command load failed");
                    CommandError::Io("Failed to load commands.".into())
                })?;
                self.replay_lines(&lines);
                Ok("Commands loaded from file.".into())
            }
            HostAction::SaveImage => {
                self.image_store.save().map_err(|error| {
                    tracing::error!(%error, "image save failed");
                    CommandError::Io("Failed to save image.".into())
                })?;
                self.drawing_unsaved = false;
                Ok("Image saved successfully.".into())
            }
            HostAction::LoadImage => {
                self.image_store.load().map_err(|error| {
                    tracing::error!(%error, "image load failed");
                    CommandError::Io("Failed to load image.".into())
                })?;
                self.drawing_unsaved = false;
                Ok("Image loaded successfully.".into())
            }
        }
    }

    // ========================================================================
    // Undo and clear
    // ========================================================================

    /// The undo button: drop the last recorded command and rebuild the
    /// drawing one history entry shorter.
    pub fn undo(&mut self) -> String {
        if self.log.is_empty() {
            return "No commands to undo.".into();
        }
        self.log.pop_last();
        self.undo_drawing();
        tracing::info!("undid last command");
        "Undid last command.".into()
    }

    /// Pop the drawing history tail and reconstruct the canvas by
    /// replaying everything that remains, in order.
    ///
    /// No-op on an empty history. The replay goes straight through the
    /// interpreter so it cannot re-append to either log; the pen color
    /// recorded on the new last entry is force-restored first so color
    /// state from the popped command does not leak, and the pen bootstrap
    /// is re-armed so the replay initializes the pen exactly like the
    /// original run did.
    pub fn undo_drawing(&mut self) {
        if self.history.pop().is_none() {
            return;
        }
        self.canvas.clear();
        self.canvas.reset();
        self.canvas.set_pen_down(true);
        self.interp.reset_bootstrap();

        if let Some(last) = self.history.last() {
            self.canvas.set_pen_color(last.color);
        }
        for entry in self.history.entries() {
            if let Err(error) = self.interp.interpret(&entry.command, &mut self.canvas) {
                tracing::warn!(command = %entry.command, %error, "history replay failed");
            }
        }
    }

    /// Discard both logs and the drawing. The cleared state still counts
    /// as unsaved command changes.
    pub fn clear_all(&mut self) {
        self.history.clear();
        self.log.clear();
        self.canvas.clear();
        self.canvas.reset();
        self.canvas.set_pen_down(true);
        self.interp.reset_bootstrap();
        self.commands_unsaved = true;
        tracing::info!("cleared drawing and history");
    }

    // ========================================================================
    // Session persistence
    // ========================================================================

    /// Re-execute a saved session: clear the drawing and both logs, then
    /// feed every non-empty line back through [`execute`](Self::execute).
    ///
    /// Individual rejections are logged and skipped; the rest of the file
    /// still loads. This is sequential re-entry, not a snapshot restore:
    /// the turtle continues from its current pose.
    pub fn replay_lines(&mut self, lines: &[String]) {
        self.canvas.clear();
        self.history.clear();
        self.log.clear();
        self.interp.reset_bootstrap();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Err(error) = self.execute(line) {
                tracing::warn!(command = line, %error, "replayed line rejected");
            }
        }
        self.commands_unsaved = false;
        tracing::info!(count = self.log.len(), "session replayed");
    }

    /// Save the command log through the store (the `save commands` button).
    pub fn save_commands(&mut self) -> Result<String, CommandError> {
        self.perform(HostAction::SaveCommands)
    }

    /// Load and replay a saved session (the `load commands` button).
    pub fn load_commands(&mut self) -> Result<String, CommandError> {
        self.perform(HostAction::LoadCommands)
    }

    /// Save the bitmap through the image store (the `save image` button).
    pub fn save_image(&mut self) -> Result<String, CommandError> {
        self.perform(HostAction::SaveImage)
    }

    /// Load a bitmap through the image store (the `load image` button).
    pub fn load_image(&mut self) -> Result<String, CommandError> {
        self.perform(HostAction::LoadImage)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn drawing_history(&self) -> &DrawingHistory {
        &self.history
    }

    pub fn command_log(&self) -> &CommandLog {
        &self.log
    }

    /// Whether the drawing changed since the last image save/load.
    pub fn drawing_unsaved(&self) -> bool {
        self.drawing_unsaved
    }

    /// Whether the command log changed since the last session save/load.
    pub fn commands_unsaved(&self) -> bool {
        self.commands_unsaved
    }
}
