//! Quicksort with the middle element as pivot.
//!
//! The pivot is the element at `(len - 1) / 2` of the current subslice, which keeps the sort
//! deterministic. Elements comparing less than the pivot end up in front of it, everything else
//! (equal or greater) behind it. The pivot itself is excluded from both sides, so every step
//! strictly shrinks the problem.

use std::cmp::Ordering;

sort_impl!("quick", stable = false);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let mid = partition(v, pivot_index(len), is_less);

        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the shorter side and continue with the longer one, to bound the recursion
        // depth by log2(len). Elements equal to the pivot all go right, so for an all equal input
        // the left side is always empty.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

#[inline]
fn pivot_index(len: usize) -> usize {
    (len - 1) / 2
}

/// Partitions `v` around the element at `pivot_pos` and returns the pivot's final position.
///
/// `v[..mid]` compares less than the pivot, `v[mid + 1..]` does not.
fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    v.swap(0, pivot_pos);

    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    let mut lt_count = 0;
    for r in 0..rest.len() {
        if is_less(&rest[r], pivot) {
            rest.swap(lt_count, r);
            lt_count += 1;
        }
    }

    // Place the pivot between the two sides.
    v.swap(0, lt_count);

    lt_count
}
