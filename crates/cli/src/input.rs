// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input side: the pattern line and the filtered character stream.
//!
//! Text is decoded from UTF-8 chunk by chunk straight from the reader's
//! buffer; a multi-byte sequence split across two chunks is carried over
//! to the next one. Nothing holds more than one chunk of text at a time.

use std::io::BufRead;

use crate::error::{Error, Result};

/// Characters below this code point (whitespace and control) are skipped
/// and do not advance the text offset.
pub const MIN_CODE_POINT: u32 = 33;

/// Read the pattern from the first line, without surrounding whitespace.
pub fn read_pattern_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Whether `c` takes part in matching.
#[inline]
pub fn is_significant(c: char) -> bool {
    c as u32 >= MIN_CODE_POINT
}

/// Streaming UTF-8 decoder yielding significant characters.
pub struct CharStream<R> {
    reader: R,
    decoded: Vec<char>,
    pos: usize,
    /// Incomplete trailing sequence of the previous chunk.
    carry: Vec<u8>,
    scratch: Vec<u8>,
    max_len: usize,
    emitted: usize,
    replaced: usize,
    done: bool,
}

impl<R: BufRead> CharStream<R> {
    /// Stream characters from `reader`, failing once more than `max_len`
    /// significant characters have been read.
    pub fn new(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            decoded: Vec::new(),
            pos: 0,
            carry: Vec::with_capacity(4),
            scratch: Vec::new(),
            max_len,
            emitted: 0,
            replaced: 0,
            done: false,
        }
    }

    /// Significant characters yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Invalid byte sequences replaced with U+FFFD so far.
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    /// Decode the next chunk. Returns false at end of input.
    fn refill(&mut self) -> Result<bool> {
        self.decoded.clear();
        self.pos = 0;

        while self.decoded.is_empty() {
            let chunk = self.reader.fill_buf()?;
            if chunk.is_empty() {
                if !self.carry.is_empty() {
                    // Input ended inside a multi-byte sequence
                    self.carry.clear();
                    self.replace();
                    return Ok(true);
                }
                return Ok(false);
            }

            self.scratch.clear();
            self.scratch.append(&mut self.carry);
            self.scratch.extend_from_slice(chunk);
            let consumed = chunk.len();
            self.reader.consume(consumed);

            self.decode_scratch();
        }
        Ok(true)
    }

    fn decode_scratch(&mut self) {
        let mut start = 0;
        loop {
            match std::str::from_utf8(&self.scratch[start..]) {
                Ok(text) => {
                    self.decoded.extend(text.chars());
                    return;
                }
                Err(e) => {
                    let valid_end = start + e.valid_up_to();
                    if let Ok(text) = std::str::from_utf8(&self.scratch[start..valid_end]) {
                        self.decoded.extend(text.chars());
                    }
                    match e.error_len() {
                        Some(len) => {
                            self.replace();
                            start = valid_end + len;
                        }
                        None => {
                            self.carry.extend_from_slice(&self.scratch[valid_end..]);
                            return;
                        }
                    }
                }
            }
        }
    }

    fn replace(&mut self) {
        if self.replaced == 0 {
            tracing::warn!("input is not valid UTF-8, substituting U+FFFD");
        }
        self.replaced += 1;
        self.decoded.push(char::REPLACEMENT_CHARACTER);
    }
}

impl<R: BufRead> Iterator for CharStream<R> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if self.pos == self.decoded.len() {
                match self.refill() {
                    Ok(true) => {}
                    Ok(false) => {
                        self.done = true;
                        return None;
                    }
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            }

            let c = self.decoded[self.pos];
            self.pos += 1;
            if !is_significant(c) {
                continue;
            }

            if self.emitted == self.max_len {
                self.done = true;
                return Some(Err(Error::TextTooLong { max: self.max_len }));
            }
            self.emitted += 1;
            return Some(Ok(c));
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
