use bridge::{List, INLINE_LEN};
use host::{Interp, MockInterp, Obj};

/// Helper: build a list value from `vals` and hand back its handle.
fn build(ip: &mut MockInterp, vals: &[i64]) -> Obj {
    let mut list = List::new(ip, vals.len());
    for &v in vals {
        list.push(v);
    }
    list.materialize()
}

/// Helper: string reps of a composite's elements.
fn element_reps(ip: &mut MockInterp, obj: Obj) -> Vec<String> {
    let items = ip.list_items(obj).expect("expected a list value");
    items
        .into_iter()
        .map(|item| String::from_utf8_lossy(&ip.string_rep(item)).into_owned())
        .collect()
}

// =============================================================================
// Push order and materialization
// =============================================================================

#[test]
fn materialize_preserves_push_order() {
    let mut ip = MockInterp::new();
    let obj = build(&mut ip, &[3, 1, 2]);
    assert_eq!(element_reps(&mut ip, obj), ["3", "1", "2"]);
}

#[test]
fn empty_builder_yields_empty_composite() {
    let mut ip = MockInterp::new();
    let obj = build(&mut ip, &[]);
    assert_eq!(ip.list_items(obj), Some(vec![]));
}

#[test]
fn builder_is_reusable_after_materialize() {
    let mut ip = MockInterp::new();
    let (first, second) = {
        let mut list = List::new(&mut ip, 4);
        list.push(1i64);
        list.push(2i64);
        let first = list.materialize();
        assert!(list.is_empty());

        list.push("again");
        (first, list.materialize())
    };
    assert_eq!(element_reps(&mut ip, first), ["1", "2"]);
    assert_eq!(element_reps(&mut ip, second), ["again"]);
}

#[test]
fn mixed_element_types() {
    let mut ip = MockInterp::new();
    let obj = {
        let mut list = List::new(&mut ip, 3);
        list.push(true);
        list.push(2.5f64);
        list.push("three");
        list.materialize()
    };
    assert_eq!(element_reps(&mut ip, obj), ["1", "2.5", "three"]);
}

// =============================================================================
// Inline vs. heap storage
// =============================================================================

#[test]
fn inline_and_heap_storage_behave_identically() {
    // One under, at, and over the inline capacity, plus the adapter-sized
    // case.
    for n in [INLINE_LEN - 1, INLINE_LEN, INLINE_LEN + 1, 40] {
        let vals: Vec<i64> = (0..n as i64).collect();
        let mut ip = MockInterp::new();
        let obj = build(&mut ip, &vals);
        let expected: Vec<String> = vals.iter().map(|v| v.to_string()).collect();
        assert_eq!(element_reps(&mut ip, obj), expected);
    }
}

#[test]
#[should_panic(expected = "exceeded its declared size")]
fn overrunning_the_inline_buffer_is_a_contract_violation() {
    let mut ip = MockInterp::new();
    let mut list = List::new(&mut ip, 2);
    for v in 0..=INLINE_LEN as i64 {
        list.push(v);
    }
}

// =============================================================================
// Ownership and release
// =============================================================================

#[test]
fn clear_releases_every_held_handle() {
    let mut ip = MockInterp::new();
    {
        let mut list = List::new(&mut ip, 3);
        list.push(1i64);
        list.push("two");
        list.clear();
        assert!(list.is_empty());
        list.clear(); // idempotent
    }
    assert_eq!(ip.live_objects(), 0);
}

#[test]
fn drop_without_materialize_releases_everything() {
    let mut ip = MockInterp::new();
    {
        let mut list = List::new(&mut ip, 8);
        for v in 0..8i64 {
            list.push(v);
        }
    }
    assert_eq!(ip.live_objects(), 0);
}

#[test]
fn materialize_transfers_ownership_into_the_composite() {
    let mut ip = MockInterp::new();
    let obj = build(&mut ip, &[1, 2, 3]);
    // Elements are held solely by the composite now.
    for item in ip.list_items(obj).unwrap() {
        assert_eq!(ip.ref_count(item), Some(1));
    }
    ip.decr_ref(obj);
    assert_eq!(ip.live_objects(), 0);
}

#[test]
fn push_obj_takes_over_an_existing_handle() {
    let mut ip = MockInterp::new();
    let obj = {
        let raw = ip.new_string(b"handed over");
        let mut list = List::new(&mut ip, 1);
        list.push_obj(raw);
        list.materialize()
    };
    assert_eq!(element_reps(&mut ip, obj), ["handed over"]);
}
