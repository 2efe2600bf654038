//! Adapter from any `io::Write` to a thread-safe sink

use crate::core::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Serializes writes to an arbitrary writer.
///
/// Each line is written with a single `write_all` under the mutex, so
/// concurrent emitters never interleave within a line.
pub struct WriterSink<W> {
    inner: Mutex<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
            name: name.into(),
        }
    }

    /// Run `f` with exclusive access to the wrapped writer
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().write_all(buf)?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
