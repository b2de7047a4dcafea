//! Error value type built on the closed kind taxonomy.
//!
//! [`Error`] is a plain value: it carries a kind, a message that is always
//! present, an optional [`CaptureSite`], and an optional owned `cause` chain.
//! It is propagation-mechanism-agnostic — return it through [`Result`], store
//! it, or panic with it; this module never retries, logs, or exits on its
//! own.
//!
//! # Examples
//!
//! ```
//! use groundwork::{Error, ErrorKind, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     raw.parse()
//!         .map_err(|_| Error::with_message(ErrorKind::Parse, format!("bad port: {raw}")))
//! }
//!
//! let err = parse_port("eighty").unwrap_err();
//! assert!(err.matches(ErrorKind::Runtime));
//! assert!(err.has_site());
//! ```

use core::fmt::{self, Display};

#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, boxed::Box, string::String};
#[cfg(feature = "std")]
use std::{borrow::Cow, boxed::Box, string::String};

use crate::site::CaptureSite;

pub mod kind;
pub mod transient;

pub use kind::ErrorKind;
pub use transient::TransientError;

/// Result alias for operations that fail with a taxonomy [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// A failure: kind, message, optional capture site, optional owned cause.
///
/// Construction never fails; every input combination (absent text, absent
/// site) produces a well-defined value. The message is always a real string,
/// never absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    site: Option<CaptureSite>,
    cause: Option<Box<Error>>,
}

impl Error {
    /// Builds an error carrying `kind`'s canonical default message, with the
    /// call site captured at this expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use groundwork::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::Range);
    /// assert_eq!(err.message(), "Out of range!");
    /// ```
    #[track_caller]
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(kind.default_message()),
            site: Some(CaptureSite::capture()),
            cause: None,
        }
    }

    /// Builds an error with an explicit message, with the call site captured
    /// at this expression.
    #[track_caller]
    #[inline]
    pub fn with_message(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            site: Some(CaptureSite::capture()),
            cause: None,
        }
    }

    /// Builds an error from possibly-absent text: `None` becomes the empty
    /// string, not the kind's default and not a panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use groundwork::{Error, ErrorKind};
    ///
    /// let err = Error::with_text(ErrorKind::Network, None);
    /// assert_eq!(err.message(), "");
    /// ```
    #[track_caller]
    #[inline]
    pub fn with_text(kind: ErrorKind, text: Option<&str>) -> Self {
        Self {
            kind,
            message: Cow::Owned(String::from(text.unwrap_or(""))),
            site: Some(CaptureSite::capture()),
            cause: None,
        }
    }

    /// Builds an error from fully explicit parts, with no implicit capture.
    /// Meant for synthetic or replayed failures; `site` may be `None`, or an
    /// explicit site whose `has_info()` is itself false.
    #[inline]
    pub fn from_parts(
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
        site: Option<CaptureSite>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            site,
            cause: None,
        }
    }

    /// Replaces the capture site.
    #[inline]
    pub fn with_site(mut self, site: CaptureSite) -> Self {
        self.site = Some(site);
        self
    }

    /// Drops the capture site, so `has_site()` becomes `false`.
    #[inline]
    pub fn detached(mut self) -> Self {
        self.site = None;
        self
    }

    /// Chains `cause` as the failure this error was raised while handling.
    /// Chaining is explicit — nothing attaches a cause automatically.
    ///
    /// # Examples
    ///
    /// ```
    /// use groundwork::{Error, ErrorKind};
    ///
    /// let inner = Error::new(ErrorKind::File);
    /// let outer = Error::new(ErrorKind::Runtime).caused_by(inner);
    /// assert_eq!(outer.cause().unwrap().kind(), ErrorKind::File);
    /// ```
    #[inline]
    pub fn caused_by(mut self, cause: Error) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// The kind tag.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The stored message, exact and immutable. Always a real string.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `true` iff a capture site is present. The site itself may still carry
    /// no information (`site().has_info() == false`).
    #[inline]
    pub fn has_site(&self) -> bool {
        self.site.is_some()
    }

    /// The capture site, if present.
    #[inline]
    pub fn site(&self) -> Option<&CaptureSite> {
        self.site.as_ref()
    }

    /// The chained prior error, if one was attached.
    #[inline]
    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_deref()
    }

    /// `true` iff this error's kind lies under `ancestor` in the taxonomy,
    /// so a handler written against an ancestor matches every descendant.
    ///
    /// # Examples
    ///
    /// ```
    /// use groundwork::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::Database);
    /// assert!(err.matches(ErrorKind::System));
    /// assert!(err.matches(ErrorKind::General));
    /// assert!(!err.matches(ErrorKind::Logic));
    /// ```
    #[inline]
    pub fn matches(&self, ancestor: ErrorKind) -> bool {
        self.kind.is_a(ancestor)
    }

    /// Iterates this error and then each cause, outermost first.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Renders the full cause chain, outermost first.
    ///
    /// # Examples
    ///
    /// ```
    /// use groundwork::{Error, ErrorKind};
    ///
    /// let err = Error::with_message(ErrorKind::Configuration, "reload failed")
    ///     .caused_by(Error::with_message(ErrorKind::File, "conf.d unreadable"));
    ///
    /// assert_eq!(err.error_chain(), "reload failed -> conf.d unreadable");
    /// ```
    pub fn error_chain(&self) -> String {
        let mut chain = String::new();
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                chain.push_str(" -> ");
            }
            chain.push_str(err.message());
        }
        chain
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

/// Conversion from a bare kind: default message, no capture site. Use
/// [`Error::new`] when the call site should be recorded.
impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Error::from_parts(kind, kind.default_message(), None)
    }
}

/// Iterator over an error and its causes, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
