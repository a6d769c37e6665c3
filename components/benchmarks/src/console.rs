//! Output and error streams used by the drivers
//!
//! Drivers never touch `stdout`/`stderr` directly, so tests can capture
//! everything a run prints.

use std::io::{self, Stderr, Stdout, Write};

/// Pair of line-oriented output streams
#[derive(Debug)]
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    /// Console writing to the process standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl Console<Vec<u8>, Vec<u8>> {
    /// Console that records everything in memory
    pub fn captured() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Everything written to the output stream so far
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    /// Everything written to the error stream so far
    pub fn errors(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}

impl<O: Write, E: Write> Console<O, E> {
    /// Create a console from explicit streams
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// The output stream
    pub fn out(&mut self) -> &mut O {
        &mut self.out
    }

    /// The error stream
    pub fn err(&mut self) -> &mut E {
        &mut self.err
    }

    /// Flush both streams
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    /// Take the streams back
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
