use crate::status::{Outcome, Status};

/// Opaque handle to a value owned by the interpreter's object system.
///
/// Handles are reference counted by the host. A freshly created handle has
/// a reference count of zero; whoever passes it across a call boundary that
/// might retain it must increment first, and must decrement exactly once
/// when done with a temporary. Decrementing a zero-count handle frees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obj(pub u32);

/// Boundary primitives supplied by the interpreter host.
///
/// This is the entire surface the bridge is allowed to touch: value
/// creation, reference counting, the per-call result and error-code slots,
/// script evaluation, and string representations. Everything runs on the
/// interpreter's own thread; implementations need not be `Sync`.
pub trait Interp {
    /// Create an integer value. Fresh handle, refcount zero.
    fn new_int(&mut self, v: i64) -> Obj;

    /// Create a floating-point value. Fresh handle, refcount zero.
    fn new_double(&mut self, v: f64) -> Obj;

    /// Create a string value from raw bytes (embedded NULs allowed).
    /// Fresh handle, refcount zero.
    fn new_string(&mut self, bytes: &[u8]) -> Obj;

    /// Create a composite (list) value from element handles, in order.
    /// The list retains its own reference to every element.
    fn new_list(&mut self, items: &[Obj]) -> Obj;

    fn incr_ref(&mut self, obj: Obj);
    fn decr_ref(&mut self, obj: Obj);

    /// Install a value in the call's result slot. The slot retains its own
    /// reference and releases any previously installed value.
    fn set_result(&mut self, obj: Obj);

    /// Clear the call's result slot.
    fn reset_result(&mut self);

    /// Attach a native status code to the error-code channel.
    fn set_error_code(&mut self, code: Status);

    /// Evaluate `words` as a command invocation: `words[0]` is the command
    /// name, the rest are its arguments. The caller keeps the word handles
    /// alive for the duration of the call.
    fn eval(&mut self, words: &[Obj]) -> Outcome;

    /// The value's textual representation, as bytes.
    fn string_rep(&mut self, obj: Obj) -> Vec<u8>;

    /// Run `f` with a reference held on every handle in `objs`, releasing
    /// all of them afterwards. Replaces matched incr/decr call pairs with
    /// one scoped acquisition.
    fn retained<R>(&mut self, objs: &[Obj], f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        for &o in objs {
            self.incr_ref(o);
        }
        let r = f(self);
        for &o in objs {
            self.decr_ref(o);
        }
        r
    }
}
