//! Top-down merge sort.
//!
//! The recursion sorts a permutation of positions rather than the elements themselves, merging
//! runs of positions through one scratch buffer with a linear two-pointer walk. The elements are
//! moved once at the end by following the cycles of that permutation. This keeps the sort free of
//! `Clone` bounds and unsafe code, and a panicking comparison leaves the slice untouched.

use std::cmp::Ordering;
use std::mem;

sort_impl!("merge", stable = true);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 || mem::size_of::<T>() == 0 {
        // These inputs are always sorted.
        return;
    }

    let mut order = (0..len).collect::<Vec<_>>();
    let mut scratch = Vec::with_capacity(len);

    sort_positions(v, &mut order, &mut scratch, is_less);
    apply_permutation(v, &mut order);
}

fn sort_positions<T, F>(v: &[T], order: &mut [usize], scratch: &mut Vec<usize>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = order.len();
    if len < 2 {
        return;
    }

    // The left run gets the first len / 2 positions.
    let mid = len / 2;
    let (left, right) = order.split_at_mut(mid);
    sort_positions(v, left, scratch, is_less);
    sort_positions(v, right, scratch, is_less);

    merge(v, order, mid, scratch, is_less);
}

/// Merges the sorted runs `order[..mid]` and `order[mid..]` in place.
fn merge<T, F>(v: &[T], order: &mut [usize], mid: usize, scratch: &mut Vec<usize>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    scratch.clear();

    let (left, right) = order.split_at(mid);
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        // Take from the right run only if strictly less, on a tie the left run wins.
        if is_less(&v[right[r]], &v[left[l]]) {
            scratch.push(right[r]);
            r += 1;
        } else {
            scratch.push(left[l]);
            l += 1;
        }
    }

    scratch.extend_from_slice(&left[l..]);
    scratch.extend_from_slice(&right[r..]);

    order.copy_from_slice(&scratch[..]);
}

/// Reorders `v` so that position `i` receives the element previously at `order[i]`.
///
/// Each cycle of the permutation is walked once, `order` is left as the identity.
fn apply_permutation<T>(v: &mut [T], order: &mut [usize]) {
    debug_assert_eq!(v.len(), order.len());

    for start in 0..v.len() {
        let mut hole = start;

        loop {
            let src = order[hole];
            order[hole] = hole;

            if src == start {
                break;
            }

            v.swap(hole, src);
            hole = src;
        }
    }
}
