use std::fmt;

/// Native status code returned by command handlers.
///
/// `Status::OK` is the success sentinel; every other code is a
/// domain-specific failure. The code travels on the interpreter's
/// error-code channel and is distinct from the two-valued call
/// outcome ([`Outcome`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub u16);

impl Status {
    pub const OK: Status = Status(0);

    #[inline]
    pub fn is_ok(self) -> bool {
        self == Status::OK
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            write!(f, "ok")
        } else {
            write!(f, "error code {}", self.0)
        }
    }
}

/// Interpreter-level outcome of one command dispatch or evaluation.
///
/// Controls script-level flow (ok vs. script error handling). Carries no
/// error detail of its own; the detail lives in the result slot and the
/// error-code channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Error,
}

impl Outcome {
    #[inline]
    pub fn is_ok(self) -> bool {
        self == Outcome::Ok
    }
}
