//! Transient error classification.
//!
//! The taxonomy never retries anything itself; it only classifies. A kind is
//! transient when retrying upstream has a reasonable chance of succeeding,
//! and the caller (or an external resilience crate) decides what to do with
//! that.

use crate::error::{Error, ErrorKind};

/// Classification of errors as transient or permanent.
///
/// # Examples
///
/// ```
/// use groundwork::{Error, ErrorKind, TransientError};
///
/// assert!(Error::new(ErrorKind::Timeout).is_transient());
/// assert!(Error::new(ErrorKind::Configuration).is_permanent());
/// ```
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }
}

impl TransientError for ErrorKind {
    /// `Timeout` and `TaskRejected` (and anything under them) are transient;
    /// every other kind is permanent.
    fn is_transient(&self) -> bool {
        self.is_a(ErrorKind::Timeout) || self.is_a(ErrorKind::TaskRejected)
    }
}

impl TransientError for Error {
    fn is_transient(&self) -> bool {
        self.kind().is_transient()
    }
}
