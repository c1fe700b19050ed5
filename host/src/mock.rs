//! In-memory reference host for tests.
//!
//! `MockInterp` implements the full [`Interp`] boundary with a slot arena
//! and a free list, honest reference counting (decrementing a zero-count
//! handle frees the slot, lists retain their elements), the result and
//! error-code channels, and an eval log. A programmable responder lets a
//! test decide the outcome of any evaluation, which is how host rejection
//! and script-side cancellation are simulated.

use crate::interp::{Interp, Obj};
use crate::status::{Outcome, Status};

/// One recorded call to [`Interp::eval`], with every word captured as its
/// string representation at the time of the call.
#[derive(Debug, Clone)]
pub struct EvalRecord {
    pub words: Vec<Vec<u8>>,
}

impl EvalRecord {
    pub fn word_str(&self, i: usize) -> String {
        String::from_utf8_lossy(&self.words[i]).into_owned()
    }

    /// Parse word `i` as a float (panics if it is not one).
    pub fn word_f64(&self, i: usize) -> f64 {
        self.word_str(i)
            .parse()
            .expect("eval word is not a number")
    }
}

type Responder = Box<dyn FnMut(&EvalRecord) -> Outcome>;

#[derive(Debug, Clone)]
enum Repr {
    Int(i64),
    Double(f64),
    Bytes(Vec<u8>),
    List(Vec<Obj>),
}

#[derive(Debug, Clone)]
struct Slot {
    refs: i32,
    repr: Repr,
}

/// Reference interpreter host backed by a slot arena.
#[derive(Default)]
pub struct MockInterp {
    slots: Vec<Option<Slot>>,
    free: Vec<u32>,
    result: Option<Obj>,
    error_code: Option<Status>,
    evals: Vec<EvalRecord>,
    responder: Option<Responder>,
}

impl MockInterp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the outcome of every subsequent `eval` call. Without a
    /// responder, evaluation always succeeds.
    pub fn set_responder(&mut self, f: impl FnMut(&EvalRecord) -> Outcome + 'static) {
        self.responder = Some(Box::new(f));
    }

    pub fn evals(&self) -> &[EvalRecord] {
        &self.evals
    }

    pub fn result(&self) -> Option<Obj> {
        self.result
    }

    /// String representation of the installed result, if any.
    pub fn result_bytes(&self) -> Option<Vec<u8>> {
        self.result.map(|obj| self.rep(obj))
    }

    pub fn result_str(&self) -> Option<String> {
        self.result_bytes()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
    }

    pub fn error_code(&self) -> Option<Status> {
        self.error_code
    }

    /// Number of live (not yet freed) value slots. Refcount hygiene checks
    /// assert this drops back to the expected count after an operation.
    pub fn live_objects(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn ref_count(&self, obj: Obj) -> Option<i32> {
        self.slots
            .get(obj.0 as usize)
            .and_then(|s| s.as_ref())
            .map(|s| s.refs)
    }

    // --- Typed readbacks -------------------------------------------------

    pub fn int_value(&self, obj: Obj) -> Option<i64> {
        match self.slot(obj).repr {
            Repr::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn double_value(&self, obj: Obj) -> Option<f64> {
        match self.slot(obj).repr {
            Repr::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn bytes_value(&self, obj: Obj) -> Option<Vec<u8>> {
        match &self.slot(obj).repr {
            Repr::Bytes(b) => Some(b.clone()),
            _ => None,
        }
    }

    pub fn list_items(&self, obj: Obj) -> Option<Vec<Obj>> {
        match &self.slot(obj).repr {
            Repr::List(items) => Some(items.clone()),
            _ => None,
        }
    }

    // --- Internals -------------------------------------------------------

    fn alloc(&mut self, repr: Repr) -> Obj {
        let slot = Slot { refs: 0, repr };
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(slot);
            Obj(idx)
        } else {
            self.slots.push(Some(slot));
            Obj(self.slots.len() as u32 - 1)
        }
    }

    fn slot(&self, obj: Obj) -> &Slot {
        self.slots
            .get(obj.0 as usize)
            .and_then(|s| s.as_ref())
            .expect("dangling value handle")
    }

    fn slot_mut(&mut self, obj: Obj) -> &mut Slot {
        self.slots
            .get_mut(obj.0 as usize)
            .and_then(|s| s.as_mut())
            .expect("dangling value handle")
    }

    fn release(&mut self, obj: Obj) {
        let slot = self.slots[obj.0 as usize]
            .take()
            .expect("double free of value handle");
        self.free.push(obj.0);
        if let Repr::List(items) = slot.repr {
            for item in items {
                self.decr_ref(item);
            }
        }
    }

    fn rep(&self, obj: Obj) -> Vec<u8> {
        match &self.slot(obj).repr {
            Repr::Int(v) => v.to_string().into_bytes(),
            Repr::Double(v) => format_double(*v).into_bytes(),
            Repr::Bytes(b) => b.clone(),
            Repr::List(items) => {
                let mut out = Vec::new();
                for (i, &item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    out.extend_from_slice(&self.rep(item));
                }
                out
            }
        }
    }
}

/// Format a double so that it always reads back as one ("1" becomes "1.0").
fn format_double(v: f64) -> String {
    let s = format!("{v}");
    if s.parse::<i64>().is_ok() {
        format!("{s}.0")
    } else {
        s
    }
}

impl Interp for MockInterp {
    fn new_int(&mut self, v: i64) -> Obj {
        self.alloc(Repr::Int(v))
    }

    fn new_double(&mut self, v: f64) -> Obj {
        self.alloc(Repr::Double(v))
    }

    fn new_string(&mut self, bytes: &[u8]) -> Obj {
        self.alloc(Repr::Bytes(bytes.to_vec()))
    }

    fn new_list(&mut self, items: &[Obj]) -> Obj {
        for &item in items {
            self.incr_ref(item);
        }
        self.alloc(Repr::List(items.to_vec()))
    }

    fn incr_ref(&mut self, obj: Obj) {
        self.slot_mut(obj).refs += 1;
    }

    fn decr_ref(&mut self, obj: Obj) {
        let slot = self.slot_mut(obj);
        slot.refs -= 1;
        if slot.refs <= 0 {
            self.release(obj);
        }
    }

    fn set_result(&mut self, obj: Obj) {
        self.incr_ref(obj);
        if let Some(old) = self.result.replace(obj) {
            self.decr_ref(old);
        }
    }

    fn reset_result(&mut self) {
        if let Some(old) = self.result.take() {
            self.decr_ref(old);
        }
    }

    fn set_error_code(&mut self, code: Status) {
        self.error_code = Some(code);
    }

    fn eval(&mut self, words: &[Obj]) -> Outcome {
        let record = EvalRecord {
            words: words.iter().map(|&w| self.rep(w)).collect(),
        };
        self.evals.push(record);
        match self.responder.take() {
            Some(mut f) => {
                let out = f(self.evals.last().expect("eval just recorded"));
                self.responder = Some(f);
                out
            }
            None => Outcome::Ok,
        }
    }

    fn string_rep(&mut self, obj: Obj) -> Vec<u8> {
        self.rep(obj)
    }
}
