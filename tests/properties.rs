//! Property tests for GrowableArray, checked against `Vec` as a model.

use elastic::GrowableArray;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i16),
    Pop,
    Insert(usize, i16),
    Erase(usize),
    InsertRange(usize, Vec<i16>),
    EraseRange(usize, usize),
    Assign(usize, i16),
    Reserve(usize),
    ShrinkToFit,
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i16>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        3 => (any::<usize>(), any::<i16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (any::<usize>(), prop::collection::vec(any::<i16>(), 0..6))
            .prop_map(|(i, vs)| Op::InsertRange(i, vs)),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::EraseRange(a, b)),
        1 => (0usize..12, any::<i16>()).prop_map(|(n, v)| Op::Assign(n, v)),
        1 => (0usize..40).prop_map(Op::Reserve),
        1 => Just(Op::ShrinkToFit),
        1 => Just(Op::Clear),
    ]
}

/// Applies `op` to both the array and the model, clamping positions to valid ones.
fn apply(array: &mut GrowableArray<i16>, model: &mut Vec<i16>, op: Op) {
    match op {
        Op::Push(v) => {
            array.push_back(v);
            model.push(v);
        }
        Op::Pop => {
            assert_eq!(array.pop_back(), model.pop());
        }
        Op::Insert(i, v) => {
            let i = i % (model.len() + 1);
            array.insert(array.begin() + i as isize, v);
            model.insert(i, v);
        }
        Op::Erase(i) => {
            if !model.is_empty() {
                let i = i % model.len();
                array.erase(array.begin() + i as isize);
                model.remove(i);
            }
        }
        Op::InsertRange(i, values) => {
            let i = i % (model.len() + 1);
            array.insert_slice(array.begin() + i as isize, &values);
            model.splice(i..i, values);
        }
        Op::EraseRange(a, b) => {
            let a = a % (model.len() + 1);
            let b = b % (model.len() + 1);
            let (first, last) = (a.min(b), a.max(b));
            array.erase_range(array.begin() + first as isize, array.begin() + last as isize);
            model.drain(first..last);
        }
        Op::Assign(n, v) => {
            array.assign(n, v);
            *model = vec![v; n];
        }
        Op::Reserve(n) => {
            let before = array.capacity();
            array.reserve(n);
            assert_eq!(array.capacity(), before.max(n));
        }
        Op::ShrinkToFit => {
            array.shrink_to_fit();
            assert_eq!(array.capacity(), array.len());
        }
        Op::Clear => {
            let before = array.capacity();
            array.clear();
            model.clear();
            assert_eq!(array.capacity(), before);
        }
    }
}

proptest! {
    #[test]
    fn matches_vec_model(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut array = GrowableArray::new();
        let mut model = Vec::new();
        for op in ops {
            apply(&mut array, &mut model, op);
            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(array.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn push_then_pop_round_trips(initial in prop::collection::vec(any::<i32>(), 0..32), value: i32) {
        let mut array = GrowableArray::from_slice(&initial);
        array.push_back(value);
        prop_assert_eq!(array.pop_back(), Some(value));
        prop_assert_eq!(array.as_slice(), initial.as_slice());
    }

    #[test]
    fn push_back_capacity_is_power_of_two(count in 1usize..300) {
        let mut array = GrowableArray::new();
        for i in 0..count {
            array.push_back(i);
        }
        prop_assert!(array.capacity().is_power_of_two());
        prop_assert_eq!(array.capacity(), count.next_power_of_two());
    }

    #[test]
    fn insert_then_erase_restores(
        initial in prop::collection::vec(any::<u8>(), 0..32),
        index in any::<usize>(),
        value: u8,
    ) {
        let index = index % (initial.len() + 1);
        let original = GrowableArray::from_slice(&initial);
        let mut array = original.clone();
        let inserted = array.insert(array.begin() + index as isize, value);
        prop_assert_eq!(array.index_of(inserted), Some(index));
        array.erase(inserted);
        prop_assert_eq!(array, original);
    }

    #[test]
    fn assign_replaces_everything(
        initial in prop::collection::vec(any::<i64>(), 0..32),
        count in 0usize..64,
        value: i64,
    ) {
        let mut array = GrowableArray::from_slice(&initial);
        array.assign(count, value);
        prop_assert_eq!(array.len(), count);
        prop_assert!(array.iter().all(|v| *v == value));
        prop_assert_eq!(array.capacity(), initial.len().max(count));
    }

    #[test]
    fn at_is_checked(initial in prop::collection::vec(any::<i32>(), 0..16)) {
        let array = GrowableArray::from_slice(&initial);
        prop_assert!(array.at(array.len()).is_err());
        if let Some(last) = initial.last() {
            prop_assert_eq!(array.at(array.len() - 1), Ok(last));
        }
    }
}
