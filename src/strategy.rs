use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SortError;
use crate::{stable, unstable};

/// A comparison sort driven entirely by a caller supplied three-way comparison.
///
/// After `sort_by` returns, `v` is a permutation of its former contents in which no element
/// compares [`Ordering::Greater`] than its successor. Stable strategies additionally keep elements
/// that compare [`Ordering::Equal`] in their input order.
///
/// The comparison must be a total order for the ordering guarantee to hold. An inconsistent
/// comparison yields an unspecified order, but every strategy still terminates and keeps all
/// elements. A panic in the comparison propagates to the caller and leaves `v` holding the same
/// elements it started with.
pub trait SortStrategy {
    fn name(&self) -> &'static str;

    fn is_stable(&self) -> bool;

    fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    #[inline]
    fn sort<T>(&self, v: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(v, |a, b| a.cmp(b));
    }
}

/// The strategies selectable at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    #[default]
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];
}

impl SortStrategy for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => stable::bubble::SortImpl.name(),
            Algorithm::Insertion => stable::insertion::SortImpl.name(),
            Algorithm::Selection => unstable::selection::SortImpl.name(),
            Algorithm::Merge => stable::merge::SortImpl.name(),
            Algorithm::Quick => unstable::quick::SortImpl.name(),
        }
    }

    fn is_stable(&self) -> bool {
        match self {
            Algorithm::Bubble => stable::bubble::SortImpl.is_stable(),
            Algorithm::Insertion => stable::insertion::SortImpl.is_stable(),
            Algorithm::Selection => unstable::selection::SortImpl.is_stable(),
            Algorithm::Merge => stable::merge::SortImpl.is_stable(),
            Algorithm::Quick => unstable::quick::SortImpl.is_stable(),
        }
    }

    #[inline]
    fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Bubble => stable::bubble::sort_by(v, compare),
            Algorithm::Insertion => stable::insertion::sort_by(v, compare),
            Algorithm::Selection => unstable::selection::sort_by(v, compare),
            Algorithm::Merge => stable::merge::sort_by(v, compare),
            Algorithm::Quick => unstable::quick::sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts the strategy name in any case, optionally suffixed with `sort` (`merge`,
    /// `MergeSort`, `merge_sort` and `merge-sort` all select merge sort).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let base = normalized.strip_suffix("sort").unwrap_or(&normalized);

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == base)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}
