//! # wd-core
//!
//! Error definitions shared by every crate in the workdays workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, the operation-context wrapper, and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result, ResultExt};
