//! Line-oriented console I/O for the interactive flows.
//!
//! Both flows talk to the terminal through a `Console` so tests can drive
//! them with an in-memory reader and inspect everything they printed. Reads
//! are blocking with no timeout; the process waits as long as the user does.

use crate::error::{Error, Result};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Prompt printed before each commit-message line.
const MESSAGE_PROMPT: &str = ">";

/// A paired reader and writer for prompt-driven interaction.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Pair an arbitrary reader and writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and return its writer.
    ///
    /// Used by tests to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write `text` without a trailing newline and flush.
    pub fn print(&mut self, text: impl std::fmt::Display) -> Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write `text` followed by a newline and flush.
    pub fn line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line, stripped of its trailing newline.
    ///
    /// Returns `None` at end of input.
    fn try_read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    /// Read one line, treating end of input as an error.
    pub fn read_line(&mut self) -> Result<String> {
        self.try_read_line()?.ok_or_else(|| {
            Error::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
        })
    }

    /// Print `prompt` (no newline) and read the answering line.
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.print(prompt)?;
        self.read_line()
    }

    /// Prompt repeatedly until a non-blank line arrives; returns it trimmed.
    pub fn prompt_nonempty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.prompt(prompt)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }

    /// Ask a yes/no question until the answer's first character decides it.
    ///
    /// `y`/`Y` is true, `n`/`N` is false, anything else (including a blank
    /// line) re-prompts.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.prompt(prompt)?;
            match answer.chars().next() {
                Some('y' | 'Y') => return Ok(true),
                Some('n' | 'N') => return Ok(false),
                _ => {}
            }
        }
    }

    /// Read a multi-line commit message.
    ///
    /// Each line is prompted with `>`. An empty line while the
    /// previous-empty flag is set ends input; the flag starts set, so a
    /// blank first line (or end of input) yields an empty message. The
    /// result is trimmed, with exactly one trailing newline when non-empty.
    pub fn read_commit_message(&mut self) -> Result<String> {
        let mut message = String::new();
        let mut prev_empty = true;
        loop {
            self.print(MESSAGE_PROMPT)?;
            let Some(input) = self.try_read_line()? else {
                break;
            };
            if input.is_empty() {
                if prev_empty {
                    break;
                }
                prev_empty = true;
            } else {
                prev_empty = false;
            }
            message.push_str(&input);
            message.push('\n');
        }

        let trimmed = message.trim();
        if trimmed.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("{trimmed}\n"))
        }
    }

    /// Block until the user presses Enter; the line's content is discarded.
    ///
    /// End of input counts as Enter.
    pub fn wait_for_enter(&mut self) -> Result<()> {
        self.try_read_line()?;
        Ok(())
    }
}
