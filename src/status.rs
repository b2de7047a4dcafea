//! Status enumerations used by callers to report outcomes.
//!
//! Stateless closed sets of named integer values. Each has a pure, total
//! rendering: every valid value maps to an exact canonical label, and any
//! out-of-range numeric maps to `"Unknown"` via the `label` functions rather
//! than failing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::fmt::{self, Display};

/// Label returned by the raw-value `label` functions for numerics outside
/// the declared range.
const UNKNOWN: &str = "Unknown";

/// Whether an operation runs synchronously or asynchronously.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SyncMode {
    Sync = 0,
    Async = 1,
}

impl SyncMode {
    /// Canonical label.
    pub const fn as_str(self) -> &'static str {
        match self {
            SyncMode::Sync => "Sync",
            SyncMode::Async => "Async",
        }
    }

    /// The mode with this discriminant, if in range.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(SyncMode::Sync),
            1 => Some(SyncMode::Async),
            _ => None,
        }
    }

    /// Label for a raw discriminant; `"Unknown"` when out of range.
    pub const fn label(raw: u8) -> &'static str {
        match Self::from_raw(raw) {
            Some(mode) => mode.as_str(),
            None => UNKNOWN,
        }
    }
}

impl Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal or retry status of an operation, signalled by callers. This
/// library neither produces nor consumes it internally.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    /// Operation finished successfully.
    Completed = 0,
    /// Action required from user or system.
    ActionNeeded = 1,
    /// Temporary failure, should retry later.
    RetryRequired = 2,
    /// Permanent failure, cannot proceed.
    Failed = 3,
}

impl State {
    /// Canonical label.
    pub const fn as_str(self) -> &'static str {
        match self {
            State::Completed => "Completed",
            State::ActionNeeded => "ActionNeeded",
            State::RetryRequired => "RetryRequired",
            State::Failed => "Failed",
        }
    }

    /// The state with this discriminant, if in range.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(State::Completed),
            1 => Some(State::ActionNeeded),
            2 => Some(State::RetryRequired),
            3 => Some(State::Failed),
            _ => None,
        }
    }

    /// Label for a raw discriminant; `"Unknown"` when out of range.
    pub const fn label(raw: u8) -> &'static str {
        match Self::from_raw(raw) {
            Some(state) => state.as_str(),
            None => UNKNOWN,
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority ordered by ascending severity. Represented as a small unsigned
/// integer so it can be used directly as a [`LookupTable`](crate::LookupTable)
/// key.
///
/// # Examples
///
/// ```
/// use groundwork::Priority;
///
/// assert!(Priority::Critical > Priority::Low);
/// assert_eq!(Priority::Critical.as_str(), "Critical");
/// assert_eq!(Priority::label(42), "Unknown");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Priority {
    Low = 0,
    Normal = 1,
    High = 2,
    Critical = 3,
}

impl Priority {
    /// Canonical label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// The priority with this discriminant, if in range.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Priority::Low),
            1 => Some(Priority::Normal),
            2 => Some(Priority::High),
            3 => Some(Priority::Critical),
            _ => None,
        }
    }

    /// Label for a raw discriminant; `"Unknown"` when out of range.
    pub const fn label(raw: u8) -> &'static str {
        match Self::from_raw(raw) {
            Some(priority) => priority.as_str(),
            None => UNKNOWN,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
