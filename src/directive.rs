//! Directive parser for generator comments.
//!
//! A directive lives on the very first line of a file, inside one of three
//! recognized comment styles:
//!
//! ```text
//! # helm:generate <command-line>
//! // helm:generate <command-line>
//! /* helm:generate <command-line> */
//! ```
//!
//! Only the leading bytes of the file are inspected; the rest of the file is
//! never read.

use std::io::{self, Read};

/// The literal keyword that introduces a directive, trailing space included.
pub const GENERATOR_KEYWORD: &str = "helm:generate ";

/// Read a generator directive from the head of `input`.
///
/// Returns `Ok(None)` when the file carries no directive: the file is shorter
/// than a comment opener, the first bytes are not a recognized comment style,
/// or the comment content does not start with [`GENERATOR_KEYWORD`]. Files
/// that merely resemble comments are never an error; only a genuine I/O
/// failure is, including a directive line with no terminating newline.
pub fn read_directive<R: Read>(input: R) -> io::Result<Option<String>> {
    let mut reader = Peeker::new(input);

    let head = reader.peek(3)?;
    if head.len() < 3 {
        return Ok(None);
    }

    // Classify the comment opener. An optional single space after the opener
    // is consumed along with it. The block style records that a trailing `*/`
    // must be stripped from the extracted line.
    let (opener_len, block_comment) = if head[0] == b'#' {
        (if head[1] == b' ' { 2 } else { 1 }, false)
    } else if head[0] == b'/' && head[1] == b'/' {
        (if head[2] == b' ' { 3 } else { 2 }, false)
    } else if head[0] == b'/' && head[1] == b'*' {
        (if head[2] == b' ' { 3 } else { 2 }, true)
    } else {
        return Ok(None);
    };
    reader.consume(opener_len);

    let keyword = reader.peek(GENERATOR_KEYWORD.len())?;
    if keyword != GENERATOR_KEYWORD.as_bytes() {
        return Ok(None);
    }
    reader.consume(GENERATOR_KEYWORD.len());

    let line = reader.read_line()?;
    let trimmed = line.trim();
    let command = if block_comment {
        trimmed.strip_suffix("*/").map(str::trim).unwrap_or(trimmed)
    } else {
        trimmed
    };

    if command.is_empty() {
        return Ok(None);
    }
    Ok(Some(command.to_string()))
}

/// Minimal buffered peeker over a [`Read`].
///
/// The parser needs to look a handful of bytes ahead without consuming them,
/// then read out the matched line. End of input is not an error for
/// [`Peeker::peek`], which simply yields fewer bytes than asked for.
struct Peeker<R> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
}

impl<R: Read> Peeker<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            pos: 0,
        }
    }

    /// Make up to `n` unconsumed bytes visible. Returns fewer than `n` only
    /// when the input ends first.
    fn peek(&mut self, n: usize) -> io::Result<&[u8]> {
        while self.buf.len() - self.pos < n {
            let mut chunk = [0u8; 64];
            let read = self.inner.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            self.buf.extend_from_slice(&chunk[..read]);
        }
        let end = (self.pos + n).min(self.buf.len());
        Ok(&self.buf[self.pos..end])
    }

    /// Discard `n` previously peeked bytes.
    fn consume(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.buf.len());
        self.pos += n;
    }

    /// Read up to and including the next newline. End of input before a
    /// newline is an `UnexpectedEof` error.
    fn read_line(&mut self) -> io::Result<String> {
        let mut out = Vec::new();
        loop {
            if let Some(idx) = self.buf[self.pos..].iter().position(|&b| b == b'\n') {
                out.extend_from_slice(&self.buf[self.pos..self.pos + idx + 1]);
                self.pos += idx + 1;
                return Ok(String::from_utf8_lossy(&out).into_owned());
            }
            out.extend_from_slice(&self.buf[self.pos..]);
            self.pos = self.buf.len();

            let mut chunk = [0u8; 256];
            let read = self.inner.read(&mut chunk)?;
            if read == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "directive line is missing a terminating newline",
                ));
            }
            self.buf.extend_from_slice(&chunk[..read]);
        }
    }
}
