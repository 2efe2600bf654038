//! Caller location resolution
//!
//! Logging entry points are `#[track_caller]`, so the location the
//! compiler hands us already skips every tracked logging layer. Frames
//! the compiler cannot see through (plain wrapper functions, calls made
//! through function pointers) are skipped by walking the stack outward
//! from that location.

use backtrace::Backtrace;
use std::panic::Location;
use std::path::Path;

/// Placeholder file reported when no location could be resolved
pub const UNKNOWN_FILE: &str = "???";

/// Default number of logging frames between application code and the
/// resolver: the emit routine and the level method that wraps it.
pub const DEFAULT_CALLER_SKIP: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub file: String,
    pub line: u32,
}

impl Caller {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_FILE, 0)
    }

    /// Resolve the location of the nearest caller outside `#[track_caller]` frames.
    ///
    /// Every public logging entry point is `#[track_caller]`, so the
    /// logging layers themselves are skipped and the reported location is
    /// the application line that issued the call.
    #[track_caller]
    pub fn resolve() -> Self {
        Self::from_location(Location::caller())
    }

    /// Resolve the tracked caller, then step `extra` frames further out.
    ///
    /// With `extra == 0` this is [`Caller::resolve`]. Otherwise the stack
    /// is captured and the frame matching the tracked location is found;
    /// the frame `extra` steps outward from it is reported. When the
    /// tracked frame cannot be found (no debug info) the tracked location
    /// is kept. When the stack is shallower than requested the result is
    /// [`Caller::unknown`].
    #[track_caller]
    pub fn resolve_skipping(extra: usize) -> Self {
        let tracked = Self::resolve();
        if extra == 0 || !tracked.is_known() {
            return tracked;
        }

        let frames = captured_frames();
        match frames.iter().position(|frame| frame.matches(&tracked)) {
            Some(start) => frames
                .get(start + extra)
                .cloned()
                .unwrap_or_else(Self::unknown),
            None => tracked,
        }
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        if location.file().is_empty() || location.line() == 0 {
            return Self::unknown();
        }
        // Paths are compared and trimmed on '/', whatever the host separator.
        Self::new(location.file().replace('\\', "/"), location.line())
    }

    pub fn is_known(&self) -> bool {
        self.line != 0 && self.file != UNKNOWN_FILE
    }

    /// Backtrace paths are absolute while tracked paths are crate-relative
    fn matches(&self, tracked: &Caller) -> bool {
        self.line == tracked.line && Path::new(&self.file).ends_with(&tracked.file)
    }
}

/// Source locations on the current stack, innermost first.
///
/// Inlined calls contribute one entry per symbol; symbols without file
/// and line information are left out.
fn captured_frames() -> Vec<Caller> {
    let backtrace = Backtrace::new();
    backtrace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .filter_map(|symbol| {
            let file = symbol.filename()?;
            let line = symbol.lineno()?;
            Some(Caller::new(file.to_string_lossy().replace('\\', "/"), line))
        })
        .collect()
}
