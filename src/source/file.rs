//! File-based row source.
//!
//! Read-once loading: the whole file is read at construction and drained by
//! the first poll. There is no tailing; a file is a static snapshot.

use crate::model::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// File source for JSONL row input.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    /// Lines not yet handed to the caller. Emptied by the first drain.
    pending: Vec<String>,
}

impl FileSource {
    /// Open and read the file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let pending = content.lines().map(str::to_string).collect();

        Ok(Self {
            path: path.to_path_buf(),
            pending,
        })
    }

    /// The path this source was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hand over all lines. First call returns the file content, every call
    /// after returns an empty vec.
    pub fn drain_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}
