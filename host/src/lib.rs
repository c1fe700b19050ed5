//! Interpreter-host boundary types.
//!
//! The embedding interpreter is consumed only through the narrow [`Interp`]
//! trait: value creation, reference counting, the per-call result and
//! error-code slots, and command evaluation. Everything above this boundary
//! (marshalling, dispatch, progress callbacks) lives in the `bridge` crate;
//! everything below it (the actual scripting engine) is out of scope.

pub mod interp;
pub mod status;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use interp::{Interp, Obj};
pub use status::{Outcome, Status};

#[cfg(any(test, feature = "test-support"))]
pub use mock::{EvalRecord, MockInterp};
