//! The closed error kind taxonomy.
//!
//! Kinds form a shallow tree rather than a flat code space, so handlers can
//! match at whatever granularity they need ("any system error" vs.
//! "specifically a timeout"). The tree is encoded by [`ErrorKind::parent`],
//! and ancestor matching is a membership test along that chain — see
//! [`ErrorKind::is_a`].

use crate::lookup::{LookupEntry, LookupTable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One node in the closed taxonomy tree identifying the category of a
/// failure.
///
/// ```text
/// General (root)
/// ├─ ProgramExit
/// ├─ Logic
/// │   ├─ Argument
/// │   │   └─ Range
/// │   ├─ NotSupported
/// │   ├─ InvalidState
/// │   ├─ AssertionFailure
/// │   └─ Duplicate
/// └─ Runtime
///     ├─ Configuration
///     ├─ Parse
///     ├─ Concurrency
///     │   └─ TaskRejected
///     ├─ PermissionDenied
///     ├─ Timeout
///     └─ System
///         ├─ File
///         ├─ Network
///         ├─ Database
///         └─ ExternalDependency
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorKind {
    /// Root of the taxonomy; every kind matches it.
    General,
    /// Deliberate program termination surfacing as an error value.
    ProgramExit,
    Logic,
    Argument,
    Range,
    NotSupported,
    InvalidState,
    AssertionFailure,
    Duplicate,
    Runtime,
    Configuration,
    Parse,
    Concurrency,
    TaskRejected,
    PermissionDenied,
    Timeout,
    System,
    File,
    Network,
    Database,
    ExternalDependency,
}

/// Canonical default message per kind, scanned by
/// [`ErrorKind::default_message`]. One entry per variant.
const DEFAULT_MESSAGES: LookupTable<ErrorKind, &str, 21> = LookupTable::new([
    LookupEntry::new(ErrorKind::General, "Error!"),
    LookupEntry::new(ErrorKind::ProgramExit, "Program exited!"),
    LookupEntry::new(ErrorKind::Logic, "Logic error!"),
    LookupEntry::new(ErrorKind::Argument, "Invalid argument!"),
    LookupEntry::new(ErrorKind::Range, "Out of range!"),
    LookupEntry::new(ErrorKind::NotSupported, "Not supported!"),
    LookupEntry::new(ErrorKind::InvalidState, "Invalid state!"),
    LookupEntry::new(ErrorKind::AssertionFailure, "Assertion failed!"),
    LookupEntry::new(ErrorKind::Duplicate, "Object already exists!"),
    LookupEntry::new(ErrorKind::Runtime, "Runtime error!"),
    LookupEntry::new(ErrorKind::Configuration, "Configuration error!"),
    LookupEntry::new(ErrorKind::Parse, "Parse error!"),
    LookupEntry::new(ErrorKind::Concurrency, "Concurrency error!"),
    LookupEntry::new(ErrorKind::TaskRejected, "Task rejected!"),
    LookupEntry::new(ErrorKind::PermissionDenied, "Permission denied!"),
    LookupEntry::new(ErrorKind::Timeout, "Timeout!"),
    LookupEntry::new(ErrorKind::System, "System error!"),
    LookupEntry::new(ErrorKind::File, "File error!"),
    LookupEntry::new(ErrorKind::Network, "Network error!"),
    LookupEntry::new(ErrorKind::Database, "Database error!"),
    LookupEntry::new(ErrorKind::ExternalDependency, "External dependency error!"),
]);

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 21] = [
        ErrorKind::General,
        ErrorKind::ProgramExit,
        ErrorKind::Logic,
        ErrorKind::Argument,
        ErrorKind::Range,
        ErrorKind::NotSupported,
        ErrorKind::InvalidState,
        ErrorKind::AssertionFailure,
        ErrorKind::Duplicate,
        ErrorKind::Runtime,
        ErrorKind::Configuration,
        ErrorKind::Parse,
        ErrorKind::Concurrency,
        ErrorKind::TaskRejected,
        ErrorKind::PermissionDenied,
        ErrorKind::Timeout,
        ErrorKind::System,
        ErrorKind::File,
        ErrorKind::Network,
        ErrorKind::Database,
        ErrorKind::ExternalDependency,
    ];

    /// The parent kind, or `None` for the root.
    pub const fn parent(self) -> Option<ErrorKind> {
        match self {
            ErrorKind::General => None,
            ErrorKind::ProgramExit | ErrorKind::Logic | ErrorKind::Runtime => {
                Some(ErrorKind::General)
            }
            ErrorKind::Argument
            | ErrorKind::NotSupported
            | ErrorKind::InvalidState
            | ErrorKind::AssertionFailure
            | ErrorKind::Duplicate => Some(ErrorKind::Logic),
            ErrorKind::Range => Some(ErrorKind::Argument),
            ErrorKind::Configuration
            | ErrorKind::Parse
            | ErrorKind::Concurrency
            | ErrorKind::PermissionDenied
            | ErrorKind::Timeout
            | ErrorKind::System => Some(ErrorKind::Runtime),
            ErrorKind::TaskRejected => Some(ErrorKind::Concurrency),
            ErrorKind::File
            | ErrorKind::Network
            | ErrorKind::Database
            | ErrorKind::ExternalDependency => Some(ErrorKind::System),
        }
    }

    /// `true` iff `ancestor` lies on this kind's parent chain. Every kind is
    /// an ancestor of itself, and every kind matches
    /// [`ErrorKind::General`].
    ///
    /// # Examples
    ///
    /// ```
    /// use groundwork::ErrorKind;
    ///
    /// assert!(ErrorKind::File.is_a(ErrorKind::System));
    /// assert!(ErrorKind::File.is_a(ErrorKind::Runtime));
    /// assert!(!ErrorKind::File.is_a(ErrorKind::Logic));
    /// ```
    pub fn is_a(self, ancestor: ErrorKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// The canonical default message for this kind — its own, never an
    /// ancestor's.
    pub fn default_message(self) -> &'static str {
        DEFAULT_MESSAGES.find(&self).copied().unwrap_or("")
    }

    /// The variant name, e.g. `"Range"` or `"Timeout"`.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::General => "General",
            ErrorKind::ProgramExit => "ProgramExit",
            ErrorKind::Logic => "Logic",
            ErrorKind::Argument => "Argument",
            ErrorKind::Range => "Range",
            ErrorKind::NotSupported => "NotSupported",
            ErrorKind::InvalidState => "InvalidState",
            ErrorKind::AssertionFailure => "AssertionFailure",
            ErrorKind::Duplicate => "Duplicate",
            ErrorKind::Runtime => "Runtime",
            ErrorKind::Configuration => "Configuration",
            ErrorKind::Parse => "Parse",
            ErrorKind::Concurrency => "Concurrency",
            ErrorKind::TaskRejected => "TaskRejected",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::Timeout => "Timeout",
            ErrorKind::System => "System",
            ErrorKind::File => "File",
            ErrorKind::Network => "Network",
            ErrorKind::Database => "Database",
            ErrorKind::ExternalDependency => "ExternalDependency",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
