//! Result Reporter: native status code (plus optional value) to the
//! interpreter's per-call outcome.
//!
//! The status code and the result value are independent channels: a failure
//! can still carry a partial result. The interpreter's textual error
//! message is never touched here; any human-readable message is the
//! handler's own business.

use host::{Interp, Obj, Outcome, Status};

use crate::encode::Encode;

/// Report a bare status: resets any prior result, then translates the
/// status into the call outcome, attaching non-success codes to the
/// error-code channel.
pub fn report<I: Interp>(ip: &mut I, status: Status) -> Outcome {
    ip.reset_result();
    finish(ip, status)
}

/// Report a status together with a result value. The value is encoded and
/// installed as the call's result on both the success and the failure path.
pub fn report_with<I: Interp>(ip: &mut I, status: Status, value: impl Encode) -> Outcome {
    let obj = value.encode(ip);
    report_obj(ip, status, obj)
}

/// Like [`report_with`], for an already-created handle (e.g. a materialized
/// list). Ownership of `obj` transfers to the result slot.
pub fn report_obj<I: Interp>(ip: &mut I, status: Status, obj: Obj) -> Outcome {
    ip.set_result(obj);
    finish(ip, status)
}

fn finish<I: Interp>(ip: &mut I, status: Status) -> Outcome {
    if status.is_ok() {
        return Outcome::Ok;
    }
    ip.set_error_code(status);
    Outcome::Error
}
