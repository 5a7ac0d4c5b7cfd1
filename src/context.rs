use std::cmp::Ordering;

use log::{debug, trace};

use crate::strategy::{Algorithm, SortStrategy};

/// Holds the selected strategy and forwards sort requests to it.
///
/// Callers keep talking to the context while the strategy behind it is swapped with
/// [`SortContext::set_strategy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortContext<S = Algorithm> {
    strategy: S,
}

impl<S: SortStrategy> SortContext<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn set_strategy(&mut self, strategy: S) {
        self.strategy = strategy;
    }

    /// Sorts `sequence` with the held strategy and hands it back.
    pub fn sort<T, F>(&self, mut sequence: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_slice(&mut sequence, compare);
        sequence
    }

    pub fn sort_slice<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        debug!(
            "Sorting {} elements with {} sort",
            v.len(),
            self.strategy.name()
        );

        self.strategy.sort_by(v, compare);

        trace!("{} sort finished", self.strategy.name());
    }
}

/// Sorts `sequence` by `compare` using `algorithm`.
pub fn sort<T, F>(sequence: Vec<T>, compare: F, algorithm: Algorithm) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    SortContext::new(algorithm).sort(sequence, compare)
}
