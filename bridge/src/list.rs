//! Ordered Value Builder: accumulates handles, yields one composite value.

use host::{Interp, Obj};

use crate::encode::Encode;

/// Elements kept inline before the builder falls back to a heap buffer.
pub const INLINE_LEN: usize = 6;

enum Store {
    Inline { buf: [Obj; INLINE_LEN], len: usize },
    Heap(Vec<Obj>),
}

/// Builds a composite ("list") value from a bounded sequence of values,
/// in push order.
///
/// The builder owns every handle pushed into it: `clear` (and drop)
/// releases each exactly once, while [`List::materialize`] transfers them
/// all into a single composite value and leaves the builder empty and
/// reusable. The declared upper-bound size only picks inline vs. heap
/// storage; staying within it is the caller's duty.
///
/// One builder belongs to one in-flight dispatch. It borrows the
/// interpreter for its whole lifetime, so finish (materialize or drop)
/// before touching the interpreter again.
pub struct List<'i, I: Interp> {
    ip: &'i mut I,
    store: Store,
}

impl<'i, I: Interp> List<'i, I> {
    /// Builder for at most `max_size` elements.
    pub fn new(ip: &'i mut I, max_size: usize) -> Self {
        let store = if max_size > INLINE_LEN {
            Store::Heap(Vec::with_capacity(max_size))
        } else {
            Store::Inline {
                buf: [Obj(0); INLINE_LEN],
                len: 0,
            }
        };
        List { ip, store }
    }

    pub fn len(&self) -> usize {
        match &self.store {
            Store::Inline { len, .. } => *len,
            Store::Heap(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encode `value` and append the resulting handle.
    pub fn push(&mut self, value: impl Encode) {
        let obj = value.encode(self.ip);
        self.push_obj(obj);
    }

    /// Append a handle the builder now owns. No refcount change: the
    /// caller hands over whatever reference it held.
    pub fn push_obj(&mut self, obj: Obj) {
        match &mut self.store {
            Store::Inline { buf, len } => {
                assert!(*len < INLINE_LEN, "list exceeded its declared size");
                buf[*len] = obj;
                *len += 1;
            }
            Store::Heap(v) => v.push(obj),
        }
    }

    /// Release every held handle and reset to empty. Idempotent.
    pub fn clear(&mut self) {
        match &mut self.store {
            Store::Inline { buf, len } => {
                let n = std::mem::take(len);
                for &obj in &buf[..n] {
                    self.ip.decr_ref(obj);
                }
            }
            Store::Heap(v) => {
                for obj in std::mem::take(v) {
                    self.ip.decr_ref(obj);
                }
            }
        }
    }

    /// Build one composite value from all held handles, transferring their
    /// ownership into it, and reset the builder to empty. Materializing an
    /// empty builder yields a valid empty composite.
    pub fn materialize(&mut self) -> Obj {
        match &mut self.store {
            Store::Inline { buf, len } => {
                let n = std::mem::take(len);
                self.ip.new_list(&buf[..n])
            }
            Store::Heap(v) => {
                let items = std::mem::take(v);
                self.ip.new_list(&items)
            }
        }
    }
}

impl<I: Interp> Drop for List<'_, I> {
    fn drop(&mut self) {
        self.clear();
    }
}
