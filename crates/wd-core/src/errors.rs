//! Error types for workdays.
//!
//! A single `thiserror`-derived enum covers every failure in the workspace.
//! Public operations attach their fully-qualified name to whatever went
//! wrong underneath by wrapping it in [`Error::Operation`], so a failure
//! reads as a chain from the outermost call down to the root cause.

use thiserror::Error;

/// The top-level error type used throughout workdays.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A failure raised while running a named public operation.
    ///
    /// `operation` is the fully-qualified path of the function that failed,
    /// `source` is the error it ran into.
    #[error("error in {operation}: {source}")]
    Operation {
        /// Fully-qualified name of the failing operation.
        operation: &'static str,
        /// The underlying error.
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap `self` as the cause of a failure in `operation`.
    pub fn in_operation(self, operation: &'static str) -> Self {
        Error::Operation {
            operation,
            source: Box::new(self),
        }
    }

    /// Name of the outermost operation, if this error was raised by one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::Operation { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// The error wrapped by an [`Error::Operation`], if any.
    pub fn inner(&self) -> Option<&Error> {
        match self {
            Error::Operation { source, .. } => Some(&**source),
            _ => None,
        }
    }

    /// Walk the [`Error::Operation`] chain down to the innermost error.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Error::Operation { source, .. } = current {
            current = &**source;
        }
        current
    }
}

/// Shorthand `Result` type used throughout workdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Extension for tagging a failed [`Result`] with the operation that
/// produced it.
pub trait ResultExt<T> {
    /// Map an `Err` into [`Error::Operation`] naming `operation`.
    fn in_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn in_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| e.in_operation(operation))
    }
}

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn positive(x: i32) -> wd_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
