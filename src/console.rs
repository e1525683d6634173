//! Console
//!
//! Line-oriented prompts over any buffered reader / writer pair, so the
//! menu can run on stdin/stdout or on in-memory buffers in tests.

use std::io::{self, BufRead, Write};

/// Prompt/print handle for one interactive session
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `message` without a newline and read one line of input
    ///
    /// Returns `Ok(None)` once the input stream is exhausted. The trailing
    /// line terminator is stripped. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD, so they fail validation like any other bad input.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print one line
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }

    /// Consume the console, returning the writer (used by tests to inspect output)
    pub fn into_writer(self) -> W {
        self.writer
    }
}
