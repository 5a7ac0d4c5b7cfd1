use std::cmp::Ordering;

use log::warn;

use crate::context::SortContext;
use crate::error::{Result, SortError};
use crate::strategy::Algorithm;

type Comparator<'a, T> = Box<dyn FnMut(&T, &T) -> Ordering + 'a>;

/// Collects the parts of a sort call and validates them before any sorting starts.
///
/// A request without a sequence or without a comparator is rejected with
/// [`SortError::InvalidArgument`]. The algorithm defaults to [`Algorithm::Quick`].
pub struct SortRequest<'a, T> {
    sequence: Option<Vec<T>>,
    comparator: Option<Comparator<'a, T>>,
    algorithm: Algorithm,
}

impl<'a, T> SortRequest<'a, T> {
    pub fn new() -> Self {
        Self {
            sequence: None,
            comparator: None,
            algorithm: Algorithm::default(),
        }
    }

    pub fn sequence(mut self, sequence: Vec<T>) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn comparator<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering + 'a,
    {
        self.comparator = Some(Box::new(compare));
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn run(self) -> Result<Vec<T>> {
        let Some(sequence) = self.sequence else {
            warn!("Rejected sort request without a sequence");
            return Err(SortError::InvalidArgument {
                argument: "sequence",
                reason: "no sequence was supplied",
            });
        };

        let Some(mut compare) = self.comparator else {
            warn!("Rejected sort request without a comparator");
            return Err(SortError::InvalidArgument {
                argument: "comparator",
                reason: "no comparator was supplied",
            });
        };

        Ok(SortContext::new(self.algorithm).sort(sequence, &mut *compare))
    }
}

impl<T> Default for SortRequest<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
