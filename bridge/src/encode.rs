//! Value Encoder: native typed values to interpreter value handles.
//!
//! Each implementation produces exactly one freshly created, zero-refcount
//! handle and has no side effect beyond the allocation inside the
//! interpreter's value space. Out-of-range inputs are contract violations
//! and fail fast with an assertion, never a recoverable error.
//!
//! Composite values are built with [`crate::list::List`] and turned into a
//! single handle by its consuming `materialize`, the list-shaped case of
//! this encoder.

use host::{Interp, Obj};

/// Longest byte string the interpreter can represent.
pub const MAX_STRING_LEN: usize = i32::MAX as usize;

/// A native value that can be rendered as an interpreter value.
pub trait Encode {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        (**self).encode(ip)
    }
}

impl Encode for bool {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        ip.new_int(i64::from(*self))
    }
}

impl Encode for i32 {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        ip.new_int(i64::from(*self))
    }
}

impl Encode for i64 {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        ip.new_int(*self)
    }
}

impl Encode for u32 {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        ip.new_int(i64::from(*self))
    }
}

impl Encode for u64 {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        assert!(
            *self <= i64::MAX as u64,
            "unsigned value {self} exceeds the interpreter's integer range"
        );
        ip.new_int(*self as i64)
    }
}

impl Encode for usize {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        (*self as u64).encode(ip)
    }
}

impl Encode for f64 {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        ip.new_double(*self)
    }
}

impl Encode for [u8] {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        assert_representable(self.len());
        ip.new_string(self)
    }
}

impl Encode for str {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        self.as_bytes().encode(ip)
    }
}

impl Encode for String {
    fn encode<I: Interp>(&self, ip: &mut I) -> Obj {
        self.as_bytes().encode(ip)
    }
}

/// Length guard for byte strings, separated so the bound can be checked
/// without allocating a buffer of that size.
fn assert_representable(len: usize) {
    assert!(
        len <= MAX_STRING_LEN,
        "string of {len} bytes exceeds the interpreter's length limit"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representable_lengths_pass_the_guard() {
        assert_representable(0);
        assert_representable(MAX_STRING_LEN);
    }

    #[test]
    #[should_panic(expected = "exceeds the interpreter's length limit")]
    fn over_long_string_is_a_contract_violation() {
        assert_representable(MAX_STRING_LEN + 1);
    }
}
