//! Adapter layer between native command handlers and an embedded
//! interpreter.
//!
//! Native, statically-typed functions are invoked as interpreter commands
//! and produce interpreter-native values as results, without each call site
//! re-implementing reference counting, buffer sizing, or error-code
//! translation. The host interpreter is reached only through the narrow
//! [`host::Interp`] boundary.
//!
//! - [`encode`] turns native values into interpreter value handles.
//! - [`list`] accumulates handles into one composite value.
//! - [`report`] installs a value and a status code as the call's outcome.
//! - [`legacy`] adapts value-handle dispatches to flat-string handlers.
//! - [`progress`] throttles long-running-operation callbacks.
//! - [`registry`] binds command names to handlers, once, at startup.

pub mod encode;
pub mod legacy;
pub mod list;
pub mod progress;
pub mod registry;
pub mod report;

pub use encode::{Encode, MAX_STRING_LEN};
pub use legacy::INLINE_ARGS;
pub use list::{List, INLINE_LEN};
pub use progress::{Progress, PROGRESS_CALLBACK};
pub use registry::{Command, CommandTable, LegacyFn, ModernFn, RegistryError};
pub use report::{report, report_obj, report_with};
