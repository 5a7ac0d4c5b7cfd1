//! Bubble sort with early exit once a pass makes no swap.

use std::cmp::Ordering;

sort_impl!("bubble", stable = true);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.gt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

fn bubble_sort<T, F>(v: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // At most len - 1 passes. After pass `pass` the largest `pass` elements are in their final
    // place, so the scan stops in front of them.
    for pass in 1..len {
        let mut swapped = false;

        for i in 1..=(len - pass) {
            // Strictly greater, equal neighbours never swap.
            if is_greater(&v[i - 1], &v[i]) {
                v.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
