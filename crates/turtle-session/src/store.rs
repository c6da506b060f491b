//! Persistence collaborators.
//!
//! The session core only needs "read all lines of a text resource" and
//! "write a list of command strings to a text resource"; everything else
//! about persistence (pickers, prompts, image codecs) belongs to the host.
//! These traits are that boundary.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Text resource holding one verbatim command per line.
pub trait CommandStore {
    /// Read every line of the resource.
    fn read_lines(&mut self) -> io::Result<Vec<String>>;

    /// Replace the resource with the given lines, newline-terminated.
    fn write_lines(&mut self, lines: &[String]) -> io::Result<()>;
}

/// Opaque bitmap persistence. The session only tracks saved/unsaved state;
/// encoding and file handling are the host's concern.
pub trait ImageStore {
    fn save(&mut self) -> io::Result<()>;
    fn load(&mut self) -> io::Result<()>;
}

/// File-backed [`CommandStore`]: plain text, one command per line, no
/// header or footer.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CommandStore for FileStore {
    fn read_lines(&mut self) -> io::Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)?;
        Ok(text.lines().map(str::to_string).collect())
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(&self.path, text)
    }
}

/// In-memory [`CommandStore`], for tests and hosts without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lines: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl CommandStore for MemoryStore {
    fn read_lines(&mut self) -> io::Result<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        self.lines = lines.to_vec();
        Ok(())
    }
}

/// [`ImageStore`] that accepts saves and loads without doing anything,
/// for hosts with no bitmap persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullImageStore;

impl ImageStore for NullImageStore {
    fn save(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn load(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        let lines = vec!["forward 50".to_string(), "left 90".to_string()];
        store.write_lines(&lines).unwrap();
        assert_eq!(store.read_lines().unwrap(), lines);
    }

    #[test]
    fn file_store_missing_file_is_an_error() {
        let mut store = FileStore::new("definitely/not/a/real/path.txt");
        assert!(store.read_lines().is_err());
    }
}
