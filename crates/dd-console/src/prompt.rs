//! Reading the start key.

use std::io::{self, BufRead};

/// What the operator chose at the start prompt.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StartDecision {
    Start,
    Cancel,
}

impl StartDecision {
    /// `S` or `s` starts the day; any other key, or no key at all, cancels.
    pub fn from_key(key: Option<char>) -> Self {
        match key {
            Some('S' | 's') => StartDecision::Start,
            _ => StartDecision::Cancel,
        }
    }
}

/// Return the first non-whitespace character of `input`, skipping blank
/// lines.  `None` at end of input.
///
/// Bytes that are not valid UTF-8 are read as U+FFFD, which cancels.
pub fn read_start_key<R: BufRead>(input: &mut R) -> io::Result<Option<char>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if let Some(c) = String::from_utf8_lossy(&line).chars().find(|c| !c.is_whitespace()) {
            return Ok(Some(c));
        }
    }
}
