// Copyright 2025 Rowdex Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Stable merge sort
//!
//! The table engine applies multi-key ordering by sorting once per sort key,
//! right-to-left, so the leftmost key dominates. That only works if each pass
//! preserves the relative order of equal elements, which this sort guarantees:
//! ties always take from the left run.

use std::cmp::Ordering;

/// Sort a vector with a stable merge sort and the given comparator
pub fn merge_sort_by<T, F>(items: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= 1 {
        return items;
    }
    let mut left = items;
    let right = left.split_off(len / 2);
    let left = merge_sort_by(left, cmp);
    let right = merge_sort_by(right, cmp);
    merge(left, right, cmp)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => {
                if cmp(a, b) == Ordering::Greater {
                    merged.push(right.next().expect("bug: peeked right run is empty"));
                } else {
                    merged.push(left.next().expect("bug: peeked left run is empty"));
                }
            }
            (Some(_), None) => merged.push(left.next().expect("bug: peeked left run is empty")),
            (None, Some(_)) => merged.push(right.next().expect("bug: peeked right run is empty")),
            (None, None) => break,
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_integers() {
        let sorted = merge_sort_by(vec![5, 3, 9, 1, 4], &|a, b| a.cmp(b));
        assert_eq!(sorted, vec![1, 3, 4, 5, 9]);
    }

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<i32> = merge_sort_by(Vec::new(), &|a: &i32, b| a.cmp(b));
        assert!(empty.is_empty());
        assert_eq!(merge_sort_by(vec![42], &|a, b| a.cmp(b)), vec![42]);
    }

    #[test]
    fn test_stability() {
        // sort by the first field only; equal keys must keep insertion order
        let items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        let sorted = merge_sort_by(items, &|a, b| a.0.cmp(&b.0));
        assert_eq!(
            sorted,
            vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]
        );
    }

    #[test]
    fn test_right_to_left_passes_compose() {
        // sorting by the secondary key, then stably by the primary key,
        // yields (primary, secondary) order
        let items = vec![(2, 2), (1, 2), (2, 1), (1, 1)];
        let by_secondary = merge_sort_by(items, &|a: &(i32, i32), b| a.1.cmp(&b.1));
        let by_primary = merge_sort_by(by_secondary, &|a, b| a.0.cmp(&b.0));
        assert_eq!(by_primary, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_already_sorted_and_reversed() {
        let asc: Vec<i32> = (0..100).collect();
        assert_eq!(merge_sort_by(asc.clone(), &|a, b| a.cmp(b)), asc);
        let desc: Vec<i32> = (0..100).rev().collect();
        assert_eq!(merge_sort_by(desc, &|a, b| a.cmp(b)), asc);
    }
}
