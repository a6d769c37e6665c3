//! Script file loading
//!
//! One [`ScriptBuffer`] is allocated per run and overwritten for every file,
//! so loading a benchmark never allocates once the buffer exists.

use crate::error::LoadError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Largest script the harness will evaluate, in bytes (8 MiB)
pub const MAX_SCRIPT_SIZE: usize = 8 << 20;

/// Reusable, capacity-bounded buffer holding one script at a time
#[derive(Debug)]
pub struct ScriptBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl ScriptBuffer {
    /// Create a buffer bounded by [`MAX_SCRIPT_SIZE`]
    pub fn new() -> Self {
        Self::with_capacity(MAX_SCRIPT_SIZE)
    }

    /// Create a buffer with a custom bound
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of bytes a read may fill
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Content of the last successful load, empty after a failed one
    pub fn contents(&self) -> &[u8] {
        &self.bytes
    }

    /// Replace the buffer contents with the file at `path`
    ///
    /// Returns the number of bytes read. A read that fills the buffer to
    /// capacity is rejected as [`LoadError::TooLarge`] because it cannot be
    /// told apart from a truncated read, and a read of zero bytes is
    /// rejected as [`LoadError::EmptyRead`].
    ///
    /// # Errors
    /// Returns `LoadError` if the file cannot be opened, is empty, does not
    /// fit, or cannot be read.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        self.bytes.clear();

        let file = File::open(path).map_err(|source| LoadError::NotFound {
            path: display.clone(),
            source,
        })?;

        let read = file
            .take(self.capacity as u64)
            .read_to_end(&mut self.bytes)
            .map_err(|source| LoadError::Io {
                path: display.clone(),
                source,
            });

        let read = match read {
            Ok(read) => read,
            Err(err) => {
                self.bytes.clear();
                return Err(err);
            }
        };

        if read == 0 {
            return Err(LoadError::EmptyRead { path: display });
        }
        if read == self.capacity {
            self.bytes.clear();
            return Err(LoadError::TooLarge {
                path: display,
                limit: self.capacity,
            });
        }

        Ok(read)
    }
}

impl Default for ScriptBuffer {
    fn default() -> Self {
        Self::new()
    }
}
