//! Sink trait for log output destinations

use std::io;
use std::sync::Arc;

/// Destination for rendered log lines.
///
/// Writes take `&self`: the logger hands the same sink to every emitting
/// thread without serializing them. A sink that is shared across threads
/// must make each `write` atomic itself if lines must not interleave.
pub trait Sink: Send + Sync {
    /// Write one rendered line, returning the number of bytes accepted.
    fn write(&self, buf: &[u8]) -> io::Result<usize>;

    fn name(&self) -> &str {
        "sink"
    }

    /// Whether lines written here reach an interactive terminal.
    ///
    /// Decides whether the default formatter styles its output; sinks of
    /// unknown destination answer `false`.
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}
