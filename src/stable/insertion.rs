//! Insertion sort, rotating each element into place.

use std::cmp::Ordering;

sort_impl!("insertion", stable = true);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let dest = insert_position(&v[..=i], is_less);

        if dest != i {
            // Moves v[i] to dest and shifts v[dest..i] one to the right.
            v[dest..=i].rotate_right(1);
        }
    }
}

/// Position in front of the run of elements strictly greater than the last element of `v`,
/// assuming `v[..v.len() - 1]` is sorted. Equal elements are not skipped past.
fn insert_position<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (tail, head) = match v.split_last() {
        Some(split) => split,
        None => return 0,
    };

    let mut dest = head.len();
    while dest > 0 && is_less(tail, &head[dest - 1]) {
        dest -= 1;
    }

    dest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_moves_nothing() {
        let mut comparisons = 0;
        let mut v = [1, 1, 2, 3, 5, 8];
        sort_by(&mut v, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });

        assert_eq!(v, [1, 1, 2, 3, 5, 8]);
        assert_eq!(comparisons, v.len() - 1);
    }

    #[test]
    fn insert_position_stops_at_equal() {
        let v = [1, 3, 3, 5, 3];
        assert_eq!(insert_position(&v, &mut |a: &i32, b: &i32| a < b), 3);

        let v = [2, 4, 0];
        assert_eq!(insert_position(&v, &mut |a: &i32, b: &i32| a < b), 0);

        let v: [i32; 0] = [];
        assert_eq!(insert_position(&v, &mut |a: &i32, b: &i32| a < b), 0);
    }

    #[test]
    fn ties_keep_order() {
        let mut v = [(3, 'a'), (1, 'b'), (3, 'c'), (0, 'd'), (1, 'e')];
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(0, 'd'), (1, 'b'), (1, 'e'), (3, 'a'), (3, 'c')]);
    }
}
