//! Line acquisition from the shell's input stream.

use crate::error::ShellError;
use std::ffi::OsString;
use std::io::{ErrorKind, Read};
use std::os::unix::ffi::OsStringExt;

/// Initial capacity of the line buffer, and the step it grows by.
pub const READ_BUFSIZE: usize = 1024;

/// One result of [`LineReader::read_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line of input without its terminator, as raw bytes.
    Text(OsString),
    /// End of input was reached before any character of a new line.
    Eof,
}

/// Grow `buf` by exactly `step` slots once it is full.
///
/// Capacity therefore follows `step, 2 * step, 3 * step, ...`. A failed
/// reservation is reported instead of aborting the process.
pub(crate) fn grow_when_full<T>(buf: &mut Vec<T>, step: usize) -> Result<(), ShellError> {
    if buf.len() >= buf.capacity() {
        buf.try_reserve_exact(step)?;
    }
    Ok(())
}

/// Reads newline-terminated lines one byte at a time.
///
/// Wrap a buffered source (such as a locked stdin) for interactive use; the
/// reader itself only ever asks for a single byte.
pub struct LineReader<R> {
    input: R,
    step: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self::with_step(input, READ_BUFSIZE)
    }

    /// Use a custom growth step. A step of zero is bumped to one.
    pub fn with_step(input: R, step: usize) -> Self {
        Self {
            input,
            step: step.max(1),
        }
    }

    /// Read the next line.
    ///
    /// End of input after some characters returns them as a final line; the
    /// next call then yields [`Line::Eof`].
    pub fn read_line(&mut self) -> Result<Line, ShellError> {
        let mut buffer: Vec<u8> = Vec::new();
        buffer.try_reserve_exact(self.step)?;

        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) if buffer.is_empty() => return Ok(Line::Eof),
                Ok(0) => break,
                Ok(_) if byte[0] == b'\n' => break,
                Ok(_) => {
                    grow_when_full(&mut buffer, self.step)?;
                    buffer.push(byte[0]);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Line::Text(OsString::from_vec(buffer)))
    }
}
