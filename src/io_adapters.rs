//! Line input sources for the interactive loop.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Cursor};

/// Outcome of asking a [`LineSource`] for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    Line(String),
    /// The user pressed Ctrl-C.
    Interrupted,
    Eof,
}

/// Where interactive commands come from.
pub trait LineSource {
    /// Read one line, showing `prompt` if the source is a terminal.
    ///
    /// # Errors
    ///
    /// Any I/O failure of the underlying input.
    fn read_line(&mut self, prompt: &str) -> Result<ReadLine>;

    /// Remember `line` for later recall. No-op for non-interactive sources.
    fn add_history(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }
}

/// Terminal input through rustyline, with history and line editing.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    /// # Errors
    ///
    /// Fails if the terminal cannot be set up.
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadLine> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadLine::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadLine::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadLine::Eof),
            Err(err) => Err(err.into()),
        }
    }

    fn add_history(&mut self, line: &str) -> Result<()> {
        self.editor.add_history_entry(line)?;
        Ok(())
    }
}

/// Line input from any buffered reader: piped stdin, a file, or memory.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderSource<Cursor<Vec<u8>>> {
    /// Memory-backed source, mostly for tests.
    pub fn from_text(text: &str) -> Self {
        Self::new(Cursor::new(text.as_bytes().to_vec()))
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadLine> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(ReadLine::Eof);
        }
        Ok(ReadLine::Line(buf))
    }
}
