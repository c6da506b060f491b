//! Drawing history and command log.
//!
//! Two ordered logs with different membership rules:
//! - [`DrawingHistory`] holds only drawing commands eligible for undo
//!   replay, each paired with the pen color active when it was issued.
//! - [`CommandLog`] holds every state-mutating command for session
//!   persistence and the visible transcript, excluding the reserved
//!   meta-commands so saved sessions never echo I/O actions back into a
//!   replay script.

use turtle_canvas::Color;

/// The reserved meta-commands, matched against the lowercased trimmed
/// line. Kept as one explicit set rather than comparisons scattered across
/// call sites.
pub const META_COMMANDS: [&str; 4] = ["save image", "save commands", "load image", "load commands"];

/// One replayable drawing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The original command text.
    pub command: String,
    /// Pen color active when the command was issued.
    pub color: Color,
}

/// Ordered log of successfully applied drawing commands.
#[derive(Debug, Clone, Default)]
pub struct DrawingHistory {
    entries: Vec<HistoryEntry>,
}

impl DrawingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawing command with its issue-time pen color.
    pub fn push(&mut self, command: impl Into<String>, color: Color) {
        self.entries.push(HistoryEntry {
            command: command.into(),
            color,
        });
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Entries oldest-first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Command texts oldest-first.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.command.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Ordered log of every recorded command line.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    lines: Vec<String>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line unless it is one of the reserved meta-commands.
    /// Returns whether the line was recorded.
    pub fn record(&mut self, line: &str) -> bool {
        let line = line.trim();
        let key = line.to_lowercase();
        if META_COMMANDS.contains(&key.as_str()) {
            return false;
        }
        self.lines.push(line.to_string());
        true
    }

    /// Remove and return the most recent line.
    pub fn pop_last(&mut self) -> Option<String> {
        self.lines.pop()
    }

    /// Recorded lines oldest-first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_pops_in_reverse_order() {
        let mut history = DrawingHistory::new();
        history.push("forward 50", Color::RED);
        history.push("circle 20", Color::GREEN);

        let entry = history.pop().unwrap();
        assert_eq!(entry.command, "circle 20");
        assert_eq!(entry.color, Color::GREEN);
        assert_eq!(history.last().unwrap().command, "forward 50");
    }

    #[test]
    fn log_excludes_reserved_meta_commands() {
        let mut log = CommandLog::new();
        assert!(log.record("forward 50"));
        assert!(!log.record("save commands"));
        assert!(!log.record("  Load IMAGE  "));
        assert!(log.record("save"));
        assert_eq!(log.lines(), ["forward 50", "save"]);
    }

    #[test]
    fn log_records_trimmed_verbatim_lines() {
        let mut log = CommandLog::new();
        log.record("  FORWARD 50  ");
        assert_eq!(log.lines(), ["FORWARD 50"]);
    }
}
