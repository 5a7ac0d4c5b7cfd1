// Runs the property suite against the standard library sorts, so that a failure in a strategy can
// be told apart from a broken suite.

use std::cmp::Ordering;

use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

struct SliceSort;

impl Sort for SliceSort {
    fn name() -> String {
        "slice::sort".into()
    }

    fn is_stable() -> bool {
        true
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        arr.sort();
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], compare: F) {
        arr.sort_by(compare);
    }
}

struct SliceSortUnstable;

impl Sort for SliceSortUnstable {
    fn name() -> String {
        "slice::sort_unstable".into()
    }

    fn is_stable() -> bool {
        false
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        arr.sort_unstable();
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], compare: F) {
        arr.sort_unstable_by(compare);
    }
}

mod slice_sort {
    use super::*;

    instantiate_sort_tests!(SliceSort);
}

mod slice_sort_unstable {
    use super::*;

    instantiate_sort_tests!(SliceSortUnstable);
}
