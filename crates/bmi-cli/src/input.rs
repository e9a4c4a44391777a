//! Line and token reading over a buffered input source.
//!
//! Unit answers are read a whole line at a time, while numbers are read as
//! whitespace-separated tokens that may share a line or span several lines.

use std::io::{self, BufRead};

/// Reads lines and tokens from standard input or any other `BufRead`.
#[derive(Debug)]
pub struct InputReader<R> {
    reader: R,
    /// Unconsumed rest of the last line a token was taken from.
    pending: Option<String>,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    /// Returns the rest of the current line without its line terminator,
    /// or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(rest) = self.pending.take() {
            return Ok(Some(rest));
        }
        self.fetch_line()
    }

    /// Returns the next whitespace-separated token, skipping blank lines,
    /// or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let line = match self.pending.take() {
                Some(rest) => rest,
                None => match self.fetch_line()? {
                    Some(line) => line,
                    None => return Ok(None),
                },
            };
            let trimmed = line.trim_start();
            if trimmed.is_empty() {
                continue;
            }
            let end = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            let (token, rest) = trimmed.split_at(end);
            self.pending = Some(rest.to_string());
            return Ok(Some(token.to_string()));
        }
    }

    fn fetch_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &str) -> InputReader<Cursor<Vec<u8>>> {
        InputReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn reads_lines_without_terminators() {
        let mut input = reader("Metric\r\n\nlast");
        assert_eq!(input.read_line().unwrap().as_deref(), Some("Metric"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn tokens_span_lines_and_share_lines() {
        let mut input = reader("\n  180 75\n\n 59.94\n");
        assert_eq!(input.next_token().unwrap().as_deref(), Some("180"));
        assert_eq!(input.next_token().unwrap().as_deref(), Some("75"));
        assert_eq!(input.next_token().unwrap().as_deref(), Some("59.94"));
        assert_eq!(input.next_token().unwrap(), None);
    }

    #[test]
    fn line_after_token_returns_remainder() {
        let mut input = reader("70 inches\nnext\n");
        assert_eq!(input.next_token().unwrap().as_deref(), Some("70"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(" inches"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn empty_input() {
        let mut input = reader("");
        assert_eq!(input.read_line().unwrap(), None);
        assert_eq!(input.next_token().unwrap(), None);
    }
}
