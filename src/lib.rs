//! Run-time selectable comparison sorts.
//!
//! Five strategies (bubble, insertion, selection, merge and quick) share the [`SortStrategy`]
//! contract and only ever look at elements through a caller supplied three-way comparison. The
//! [`Algorithm`] enum picks one of them at run time, [`SortContext`] holds the current choice.
//!
//! ```
//! use strategy_sort::{sort, Algorithm};
//!
//! let ages = sort(vec![20, 18, 23], |a, b| a.cmp(b), Algorithm::Merge);
//! assert_eq!(ages, [18, 20, 23]);
//! ```

macro_rules! sort_impl {
    ($name:expr, stable = $is_stable:expr) => {
        /// Zero-sized handle for this strategy.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct SortImpl;

        impl $crate::SortStrategy for SortImpl {
            fn name(&self) -> &'static str {
                $name
            }

            fn is_stable(&self) -> bool {
                $is_stable
            }

            #[inline]
            fn sort_by<T, F>(&self, v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod context;
pub mod employee;
pub mod error;
pub mod report;
pub mod request;
pub mod stable;
pub mod strategy;
pub mod unstable;

pub use context::{sort, SortContext};
pub use error::{Result, SortError};
pub use request::SortRequest;
pub use strategy::{Algorithm, SortStrategy};

pub use stable::bubble::SortImpl as BubbleSort;
pub use stable::insertion::SortImpl as InsertionSort;
pub use stable::merge::SortImpl as MergeSort;
pub use unstable::quick::SortImpl as QuickSort;
pub use unstable::selection::SortImpl as SelectionSort;
