//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use groundwork::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`site!`], [`err!`], [`lookup_table!`]
//! - **Types**: [`Error`], [`ErrorKind`], [`CaptureSite`], [`LookupTable`],
//!   [`LookupEntry`], [`Priority`], [`State`], [`SyncMode`]
//! - **Traits**: [`TransientError`]
//!
//! # Examples
//!
//! ```
//! use groundwork::prelude::*;
//!
//! fn checked_get(values: &[u32], index: usize) -> Result<u32> {
//!     values
//!         .get(index)
//!         .copied()
//!         .ok_or_else(|| err!(Range, "index {} past {}", index, values.len()))
//! }
//!
//! let err = checked_get(&[1, 2, 3], 9).unwrap_err();
//! assert!(err.matches(ErrorKind::Logic));
//! ```

// Macros
pub use crate::{err, lookup_table, site};

// Core types
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::lookup::{LookupEntry, LookupTable};
pub use crate::site::CaptureSite;
pub use crate::status::{Priority, State, SyncMode};

// Traits
pub use crate::error::TransientError;
