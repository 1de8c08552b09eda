// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keel_alloc::System;
use proptest::prelude::*;

use crate::{CapacityPolicy, KeelVec, cmp};

#[derive(Debug, Clone)]
enum Op {
    Push(u32),
    Pop,
    Insert(usize, u32),
    Remove(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => (any::<usize>(), any::<u32>()).prop_map(|(index, value)| Op::Insert(index, value)),
        2 => any::<usize>().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn capacity_invariant_holds_across_op_sequences(
        ops in prop::collection::vec(op_strategy(), 1..64),
        growth_factor in 1.0f32..4.0,
        shrink_threshold in 0.0f32..0.9,
    ) {
        let policy = CapacityPolicy::new(growth_factor, shrink_threshold)
            .expect("Failed to create policy");
        let mut vec = KeelVec::with_allocator_and_policy(0, System, policy)
            .expect("Failed to create vector");

        for op in ops {
            match op {
                Op::Push(value) => vec.push(value).expect("Failed to push"),
                Op::Pop => {
                    let _ = vec.pop();
                }
                Op::Insert(index, value) => {
                    let index = index % (vec.len() + 1);
                    vec.insert(index, value).expect("Failed to insert");
                }
                Op::Remove(index) => {
                    if !vec.is_empty() {
                        let index = index % vec.len();
                        vec.remove(index).expect("Failed to remove");
                    }
                }
                Op::Clear => vec.clear(),
            }

            prop_assert!(vec.len() <= vec.capacity());
            prop_assert!(vec.capacity() >= 1);
        }
    }

    #[test]
    fn binary_search_insertion_point_keeps_sequence_sorted(
        values in prop::collection::vec(any::<u32>(), 0..64),
    ) {
        let mut vec = KeelVec::with_capacity(0).expect("Failed to create vector");

        for value in &values {
            let index = match vec.binary_search(value, cmp::three_way) {
                Ok(index) | Err(index) => index,
            };
            vec.insert(index, *value).expect("Failed to insert");
        }

        prop_assert_eq!(vec.len(), values.len());
        prop_assert!(vec.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
