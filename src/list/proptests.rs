use proptest::prelude::*;

use crate::list::List;

#[derive(Clone, Debug)]
enum Op {
    PushBack(u8),
    PushFront(u8),
    PopBack,
    PopFront,
    Insert(usize, u8),
    Remove(usize),
    Set(usize, u8),
    RemoveItem(u8),
    RemoveRange(usize, usize),
    CursorRemove(usize, bool),
}

fn op() -> impl Strategy<Value = Op> {
    // Indices are reduced modulo the current length in `apply`, keeping one
    // out-of-range slot.
    prop_oneof![
        3 => any::<u8>().prop_map(Op::PushBack),
        2 => any::<u8>().prop_map(Op::PushFront),
        1 => Just(Op::PopBack),
        1 => Just(Op::PopFront),
        3 => (any::<usize>(), any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Remove),
        1 => (any::<usize>(), any::<u8>()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => (0_u8..8).prop_map(Op::RemoveItem),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::RemoveRange(a, b)),
        1 => (any::<usize>(), any::<bool>()).prop_map(|(i, f)| Op::CursorRemove(i, f)),
    ]
}

fn apply(list: &mut List<u8>, model: &mut Vec<u8>, op: &Op) {
    let len = model.len();
    match *op {
        Op::PushBack(v) => {
            list.push_back(v);
            model.push(v);
        }
        Op::PushFront(v) => {
            list.push_front(v);
            model.insert(0, v);
        }
        Op::PopBack => assert_eq!(list.pop_back(), model.pop()),
        Op::PopFront => {
            let expected = (!model.is_empty()).then(|| model.remove(0));
            assert_eq!(list.pop_front(), expected);
        }
        Op::Insert(i, v) => {
            let at = i % (len + 2);
            if at <= len {
                assert_eq!(list.insert(at, v), Ok(()));
                model.insert(at, v);
            } else {
                assert!(list.insert(at, v).is_err());
            }
        }
        Op::Remove(i) => {
            let at = i % (len + 1);
            if at < len {
                assert_eq!(list.remove(at), Ok(model.remove(at)));
            } else {
                assert!(list.remove(at).is_err());
            }
        }
        Op::Set(i, v) => {
            let at = i % (len + 1);
            if at < len {
                assert_eq!(list.set(at, v), Ok(std::mem::replace(&mut model[at], v)));
            } else {
                assert!(list.set(at, v).is_err());
            }
        }
        Op::RemoveItem(v) => {
            let expected = model.iter().position(|&e| e == v).map(|at| model.remove(at));
            assert_eq!(list.remove_item(&v), expected.is_some());
        }
        Op::RemoveRange(a, b) => {
            let (from, to) = (a % (len + 1), b % (len + 1));
            if from <= to {
                let removed = list.remove_range(from, to).unwrap();
                let expected: Vec<u8> = model.drain(from..to).collect();
                assert_eq!(removed, expected);
                removed.check_invariants();
            } else {
                assert!(list.remove_range(from, to).is_err());
            }
        }
        Op::CursorRemove(i, forward) => {
            let at = i % (len + 1);
            let mut cursor = list.cursor_mut(at).unwrap();
            let stepped = if forward {
                cursor.next().map(|e| *e).ok().map(|e| (at, e))
            } else {
                cursor.previous().map(|e| *e).ok().map(|e| (at - 1, e))
            };
            match stepped {
                Some((index, element)) => {
                    assert_eq!(cursor.remove(), Ok(element));
                    assert_eq!(model.remove(index), element);
                    assert_eq!(cursor.next_index(), index);
                }
                None => assert!(cursor.remove().is_err()),
            }
        }
    }
}

proptest! {
    #[test]
    fn list_matches_vec_model(ops in proptest::collection::vec(op(), 0..200)) {
        let mut list = List::new();
        let mut model = Vec::new();
        for op in &ops {
            apply(&mut list, &mut model, op);
            prop_assert_eq!(list.len(), model.len());
            prop_assert!(list.iter().eq(model.iter()));
            prop_assert!(list.iter().rev().eq(model.iter().rev()));
        }
        list.check_invariants();
    }

    #[test]
    fn index_resolution_matches_slice(model in proptest::collection::vec(any::<u16>(), 0..64)) {
        let list = List::from(model.clone());
        for (i, element) in model.iter().enumerate() {
            prop_assert_eq!(list.get(i), Ok(element));
        }
        prop_assert!(list.get(model.len()).is_err());
        prop_assert_eq!(list.hash_code(), crate::sequence::hash_code(&model));
    }

    #[test]
    fn index_of_agrees_with_last_index_of(model in proptest::collection::vec(0_u8..16, 0..32), x in 0_u8..16) {
        let list = List::from(model.clone());
        prop_assert_eq!(list.index_of(&x), model.iter().position(|&e| e == x));
        prop_assert_eq!(list.last_index_of(&x), model.iter().rposition(|&e| e == x));
        if model.iter().filter(|&&e| e == x).count() <= 1 {
            prop_assert_eq!(list.index_of(&x), list.last_index_of(&x));
        }
    }
}
