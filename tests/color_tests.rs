//! Styling decisions of the default formatter
//!
//! `colored`'s override is process-wide, so everything that depends on it
//! lives in this one test.

use logx::prelude::*;
use std::io;

/// Captures lines while claiming to be an interactive terminal
#[derive(Clone, Default)]
struct TerminalSink(MemorySink);

impl Sink for TerminalSink {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

#[test]
fn test_default_formatter_follows_sink() {
    colored::control::set_override(true);

    let buffer = MemorySink::new();
    let logger = Logger::new(buffer.clone());
    logger.warn("to a buffer");
    assert!(buffer.contents().contains("to a buffer"));
    assert!(!buffer.contents().contains('\x1b'), "got {:?}", buffer.contents());

    let terminal = TerminalSink::default();
    logger.set_output(terminal.clone());
    logger.warn("to a terminal");
    assert!(terminal.0.contents().contains('\x1b'));

    // Redirecting away from the terminal drops styling again
    let file_like = MemorySink::new();
    logger.set_output(file_like.clone());
    logger.warn("back to plain");
    assert!(!file_like.contents().contains('\x1b'));

    let built = Logger::builder().output(terminal.clone()).build();
    terminal.0.clear();
    built.info("built for a terminal");
    assert!(terminal.0.contents().contains('\x1b'));

    // An explicit formatter survives redirection
    built.set_formatter(DefaultFormatter::plain());
    let second_terminal = TerminalSink::default();
    built.set_output(second_terminal.clone());
    built.info("explicitly plain");
    assert!(!second_terminal.0.contents().contains('\x1b'));

    let forced = Logger::builder()
        .output(file_like.clone())
        .formatter(DefaultFormatter::new())
        .build();
    file_like.clear();
    forced.error("explicitly colored");
    assert!(file_like.contents().contains('\x1b'));

    colored::control::unset_override();
}
