//! Standard stream sinks

use crate::core::Sink;
use std::io::{self, IsTerminal, Write};

/// Process standard output; each line is written under the stream lock
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

/// Process standard error; each line is written under the stream lock
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Sink for Stdout {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().lock().write_all(buf)?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "stdout"
    }

    fn is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }
}

impl Sink for Stderr {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().lock().write_all(buf)?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "stderr"
    }

    fn is_terminal(&self) -> bool {
        io::stderr().is_terminal()
    }
}
