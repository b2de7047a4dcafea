//! Foundation types shared by every other component: a hierarchical error
//! taxonomy with call-site capture, an immutable const-constructable lookup
//! table, and the small status enumerations callers use to report outcomes.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `groundwork::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Errors with call-site capture
//!
//! ```
//! use groundwork::{Error, ErrorKind};
//!
//! let err = Error::new(ErrorKind::Timeout);
//!
//! assert_eq!(err.message(), "Timeout!");
//! assert!(err.matches(ErrorKind::Runtime));
//! assert!(err.has_site());
//! ```
//!
//! ## Chaining a cause
//!
//! ```
//! use groundwork::{Error, ErrorKind};
//!
//! let inner = Error::with_message(ErrorKind::File, "settings.toml missing");
//! let outer = Error::new(ErrorKind::Configuration).caused_by(inner);
//!
//! let cause = outer.cause().unwrap();
//! assert_eq!(cause.kind(), ErrorKind::File);
//! assert_eq!(cause.message(), "settings.toml missing");
//! ```
//!
//! ## Const lookup table
//!
//! ```
//! use groundwork::{lookup_table, LookupTable, Priority};
//!
//! const RETRY_BUDGET: LookupTable<Priority, u32, 4> = lookup_table![
//!     (Priority::Low, 0),
//!     (Priority::Normal, 1),
//!     (Priority::High, 3),
//!     (Priority::Critical, 5),
//! ];
//!
//! assert_eq!(RETRY_BUDGET.find(&Priority::High), Some(&3));
//! assert_eq!(RETRY_BUDGET.len(), 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Error value type and the closed kind taxonomy
pub mod error;
/// Immutable, const-constructable key/value lookup table
pub mod lookup;
/// Macros for call-site capture and error construction
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Call-site capture primitive
pub mod site;
/// Status enumerations used by callers to report outcomes
pub mod status;

pub use error::{Chain, Error, ErrorKind, Result, TransientError};
pub use lookup::{LookupEntry, LookupTable};
pub use site::CaptureSite;
pub use status::{Priority, State, SyncMode};
