//! Line-based terminal I/O

use std::fmt::Display;
use std::io::{BufRead, Write};

use shared::CoreResult;

use crate::error::{AppError, AppResult};

/// Prompt/print pair over any line reader and writer
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line.
    ///
    /// Returns `AppError::InputClosed` at end of input.
    pub fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and are left to the field checks
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Err(AppError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Prompt for a field and parse it.
    ///
    /// A value that fails `parse` prints `rejection` and yields `None`, so the
    /// caller can abandon the whole entry at the first bad field.
    pub fn ask<T, F>(&mut self, label: &str, rejection: &str, parse: F) -> AppResult<Option<T>>
    where
        F: FnOnce(&str) -> CoreResult<T>,
    {
        let line = self.prompt(label)?;
        match parse(&line) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected input");
                self.say(rejection)?;
                Ok(None)
            }
        }
    }

    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_ending() {
        let mut term = Terminal::new(Cursor::new("hello\r\n"), Vec::new());
        assert_eq!(term.prompt("> ").unwrap(), "hello");
        assert_eq!(String::from_utf8(term.into_output()).unwrap(), "> ");
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut term = Terminal::new(Cursor::new(b"Jos\xe9\n".to_vec()), Vec::new());
        assert_eq!(term.prompt("> ").unwrap(), "Jos\u{FFFD}");
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        assert!(matches!(term.prompt("> "), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_ask_prints_rejection() {
        let mut term = Terminal::new(Cursor::new("-5\n"), Vec::new());
        let answer = term
            .ask("Fee: ", "Enter correct fee.", |raw| {
                shared::parse_non_negative_amount("fee", raw)
            })
            .unwrap();
        assert!(answer.is_none());
        let out = String::from_utf8(term.into_output()).unwrap();
        assert!(out.contains("Enter correct fee."));
    }
}
