//! Whitespace-delimited token input
//!
//! Tokens may share a line or span several lines; blank lines are skipped.

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Space, tab, newline, vertical tab, form feed and carriage return.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{0B}'
}

/// Finds the next token in `text` as a `(start, end)` byte range.
fn next_token_bounds(text: &str) -> Option<(usize, usize)> {
    let start = text.find(|c: char| !is_separator(c))?;
    let len = text[start..].find(is_separator).unwrap_or(text.len() - start);
    Some((start, start + len))
}

/// Tokens are cut from the current line on demand; at most one line is buffered.
pub struct TokenReader<R> {
    reader: R,
    line: String,
    cursor: usize,
    exhausted: bool,
}

impl<R: AsyncBufRead + Unpin> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            cursor: 0,
            exhausted: false,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Invalid UTF-8 is replaced lossily rather than rejected.
    pub async fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();

        loop {
            if let Some((start, end)) = next_token_bounds(&self.line[self.cursor..]) {
                let token = self.line[self.cursor + start..self.cursor + end].to_owned();
                self.cursor += end;
                return Ok(Some(token));
            }

            if self.exhausted {
                return Ok(None);
            }

            bytes.clear();
            if self.reader.read_until(b'\n', &mut bytes).await? == 0 {
                self.exhausted = true;
                continue;
            }

            self.line = String::from_utf8_lossy(&bytes).into_owned();
            self.cursor = 0;
        }
    }

    #[cfg(test)]
    fn buffered_len(&self) -> usize {
        self.line.len() - self.cursor
    }
}
