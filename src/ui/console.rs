//! Line-based console
//!
//! The only channel between the game and the operator.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Reads answers and writes lines of text
pub trait Console {
    /// Show `prompt` and block for one line. `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Console over any buffered reader and writer
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(Some(trimmed.to_string()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("failed to write output")
    }
}
