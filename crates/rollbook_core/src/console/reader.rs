//! Whitespace token reader with integer recovery.

use crate::console::{INVALID_INPUT_MESSAGE, VALUE_PROMPT};
use log::debug;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Splits a line-oriented source into whitespace-separated tokens.
pub struct TokenReader<R: BufRead> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Prompts for one integer operand.
///
/// Returns `Ok(None)` when input ends before a valid integer arrives.
pub fn read_int<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    out: &mut W,
) -> io::Result<Option<i32>> {
    prompt_int(reader, out, VALUE_PROMPT)
}

pub(crate) fn prompt_int<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<i32>> {
    loop {
        writeln!(out, "{prompt}")?;
        let Some(token) = reader.next_token()? else {
            return Ok(None);
        };
        match token.parse::<i32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                debug!(
                    "event=input_rejected module=console status=retry token_len={}",
                    token.chars().count()
                );
                writeln!(out, "{INVALID_INPUT_MESSAGE}")?;
            }
        }
    }
}
