//! Call-site capture primitive.
//!
//! [`CaptureSite`] records the file, line, and enclosing function active at a
//! specific point in the caller's code. Capture binds at the evaluation point
//! of the call expression, so two errors built through the same shared
//! constructor at different call sites never share a site.
//!
//! Rust's call-site facility (`#[track_caller]`) exposes file and line but
//! not the enclosing function name; [`CaptureSite::capture`] therefore leaves
//! `function` absent. The [`site!`](crate::site!) macro fills all three
//! fields.
//!
//! # Examples
//!
//! ```
//! use groundwork::CaptureSite;
//!
//! let here = CaptureSite::capture();
//! assert_eq!(here.file(), Some(file!()));
//! assert!(here.has_info());
//!
//! let synthetic = CaptureSite::new(Some("replay.rs"), 12, None);
//! assert_eq!(synthetic.line(), 12);
//! ```

use core::fmt::{self, Display};
use core::panic::Location;

/// Immutable (file, line, function) triple identifying where a failure or
/// diagnostic object was constructed.
///
/// A `line` of 0 means "unknown"; `file` and `function` may each be absent
/// independently. All accessors are pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureSite {
    file: Option<&'static str>,
    line: u32,
    function: Option<&'static str>,
}

impl CaptureSite {
    /// Builds a site from explicit components, for synthetic or replayed
    /// locations. Any component may be absent.
    #[inline]
    pub const fn new(
        file: Option<&'static str>,
        line: u32,
        function: Option<&'static str>,
    ) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// A site with no information at all; `has_info()` is `false`.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(None, 0, None)
    }

    /// Captures the file and line of the call expression that evaluates this
    /// function. `function` is left absent; use [`site!`](crate::site!) when
    /// the enclosing function name is wanted too.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        let caller = Location::caller();
        Self {
            file: Some(caller.file()),
            line: caller.line(),
            function: None,
        }
    }

    /// The source file, if known.
    #[inline]
    pub const fn file(&self) -> Option<&'static str> {
        self.file
    }

    /// The source line; 0 means unknown.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The enclosing function, if known.
    #[inline]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// `true` iff the site pins down a location: a usable file/line pair, or
    /// a function name.
    #[inline]
    pub const fn has_info(&self) -> bool {
        (self.line != 0 && self.file.is_some()) || self.function.is_some()
    }
}

impl Display for CaptureSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file, self.function) {
            (Some(file), Some(function)) => write!(f, "{}:{} in {}", file, self.line, function),
            (Some(file), None) => write!(f, "{}:{}", file, self.line),
            (None, Some(function)) => write!(f, "{}", function),
            (None, None) => write!(f, "<unknown>"),
        }
    }
}
