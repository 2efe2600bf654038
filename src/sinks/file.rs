//! File sink implementation

use crate::core::{Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file.
///
/// The file is opened in append mode and every line goes out in one
/// `write_all`, unbuffered, so nothing is lost if the process exits
/// without dropping the sink.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
    name: String,
}

impl FileSink {
    /// Open `path` for appending, creating it if missing
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self::from_file(file, path))
    }

    /// Open an existing file for appending
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().append(true).open(&path)?;
        Ok(Self::from_file(file, path))
    }

    fn from_file(file: File, path: PathBuf) -> Self {
        let name = format!("file:{}", path.display());
        Self { file, path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (&self.file).write_all(buf)?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
