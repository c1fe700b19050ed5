//! Calling-Convention Adapter: argument-vector dispatch to flat-string
//! handlers.
//!
//! Legacy native handlers predate the value-handle convention and expect a
//! flat array of C strings plus a count. The adapter extracts each
//! argument's string representation in order, keeps the buffers alive for
//! exactly one dispatch, and forwards the handler's outcome unchanged; it
//! has no failure mode of its own.

use std::ffi::{CStr, CString};

use host::{Interp, Obj, Outcome};

use crate::registry::LegacyFn;

/// Argument counts up to this use a fixed on-stack buffer; anything larger
/// gets a heap buffer sized exactly to the count.
pub const INLINE_ARGS: usize = 16;

pub(crate) fn call_legacy<I: Interp, C>(
    f: LegacyFn<I, C>,
    ctx: &mut C,
    ip: &mut I,
    args: &[Obj],
) -> Outcome {
    let n = args.len();
    if n <= INLINE_ARGS {
        let mut reps: [CString; INLINE_ARGS] = std::array::from_fn(|_| CString::default());
        for (slot, &obj) in reps.iter_mut().zip(args) {
            *slot = cstring_rep(ip, obj);
        }
        let mut argv: [&CStr; INLINE_ARGS] = [c""; INLINE_ARGS];
        for (slot, rep) in argv.iter_mut().zip(&reps[..n]) {
            *slot = rep;
        }
        f(ctx, ip, &argv[..n])
    } else {
        let reps: Vec<CString> = args.iter().map(|&obj| cstring_rep(ip, obj)).collect();
        let argv: Vec<&CStr> = reps.iter().map(|rep| rep.as_c_str()).collect();
        f(ctx, ip, &argv)
    }
}

fn cstring_rep<I: Interp>(ip: &mut I, obj: Obj) -> CString {
    // Interior NULs cannot cross the legacy convention; passing one is a
    // contract violation by the caller.
    CString::new(ip.string_rep(obj)).expect("legacy argument contains an interior NUL byte")
}
