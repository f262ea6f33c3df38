//! Integration tests for the public API.
//!
//! These exercise the array through the facade crate only, the way a caller
//! would.

use elastic::{ConstCursor, Cursor, GrowableArray, OutOfRange, growable};
use pretty_assertions::assert_eq;

#[test]
fn test_append_heavy_workload() {
    let mut array = GrowableArray::new();
    for i in 0..1000u32 {
        array.push_back(i);
    }
    assert_eq!(array.len(), 1000);
    assert_eq!(array.capacity(), 1024);
    assert!(array.iter().copied().eq(0..1000));

    while array.len() > 10 {
        array.pop_back();
    }
    assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(array.capacity(), 1024);
}

#[test]
fn test_splice_between_arrays() {
    let source = growable![10, 20, 30, 40];
    let mut target = growable![1, 2];

    // SAFETY: both cursors address `source`, which outlives the borrow.
    let middle = unsafe { ConstCursor::slice_between(source.cbegin() + 1, source.cend()) };
    let first = target.insert_slice(target.end(), middle);

    assert_eq!(target.as_slice(), &[1, 2, 20, 30, 40]);
    assert_eq!(target.index_of(first), Some(2));
    assert_eq!(target.capacity(), 5);
}

#[test]
fn test_erase_every_other_with_returned_cursor() {
    let mut array: GrowableArray<i32> = (0..10).collect();
    let mut cursor = array.begin();
    while cursor != array.end() {
        cursor = array.erase(cursor);
        if cursor != array.end() {
            cursor.inc();
        }
    }
    assert_eq!(array.as_slice(), &[1, 3, 5, 7, 9]);
}

#[test]
fn test_recover_from_out_of_range() {
    let array = growable!["north", "east", "south", "west"];
    let lookup = |index: usize| array.at(index).copied().unwrap_or("?");

    assert_eq!(lookup(1), "east");
    assert_eq!(lookup(4), "?");
    assert_eq!(array.at(array.len()), Err(OutOfRange { index: 4, len: 4 }));
    assert_eq!(array.at(array.len() - 1), Ok(&"west"));
    assert_eq!(array.len(), 4);
}

#[test]
fn test_literal_lists_compare_equal() {
    let a = growable![1.5, 2.5];
    let mut b = GrowableArray::from_slice(&[1.5, 2.5]);
    assert_eq!(a, b);
    b.push_back(3.5);
    assert_ne!(a, b);
}

#[test]
fn test_cursor_round_trip_through_both_kinds() {
    let mut array = growable![3, 1, 2];
    let last: Cursor<i32> = array.end() - 1isize;
    let read_only: ConstCursor<i32> = last.into();

    assert_eq!(array.get_at(read_only), Some(&2));
    let moved = array.insert(read_only, 0);
    assert_eq!(array.as_slice(), &[3, 1, 0, 2]);
    assert_eq!(moved - array.begin(), 2);
}

#[test]
fn test_move_and_take_transfer_ownership() {
    let mut array = growable![String::from("a"), String::from("b")];
    let taken = std::mem::take(&mut array);
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
    assert_eq!(taken.len(), 2);

    let moved = taken;
    assert_eq!(moved.back(), "b");
}

#[test]
fn test_diagnostic_output() {
    let mut array = GrowableArray::with_capacity(4);
    array.assign_slice(&[1, 2]);
    expect_test::expect!["{ 1 2 | _ _ }, size=2, capacity=4"].assert_eq(&array.to_string());
}
