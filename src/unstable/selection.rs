//! Selection sort.

use std::cmp::Ordering;

sort_impl!("selection", stable = false);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The last position is left holding the maximum without a scan of its own.
    for start in 0..(len - 1) {
        let min = start + min_index(&v[start..], is_less);

        if min != start {
            v.swap(start, min);
        }
    }
}

/// Index of the first minimum in `v`, `v` must not be empty.
fn min_index<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min = 0;
    for i in 1..v.len() {
        if is_less(&v[i], &v[min]) {
            min = i;
        }
    }

    min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_reorders_equal_elements() {
        // The 2 at the front is swapped behind the other 2.
        let mut v = [(2, 'a'), (2, 'b'), (1, 'c')];
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(1, 'c'), (2, 'b'), (2, 'a')]);
    }

    #[test]
    fn first_minimum_is_selected() {
        let v = [4, 1, 3, 1];
        assert_eq!(min_index(&v, &mut |a: &i32, b: &i32| a < b), 1);
    }

    #[test]
    fn comparison_count_is_fixed() {
        let mut comparisons = 0;
        let mut v = [1, 2, 3, 4, 5];
        sort_by(&mut v, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });

        assert_eq!(comparisons, 4 + 3 + 2 + 1);
    }
}
