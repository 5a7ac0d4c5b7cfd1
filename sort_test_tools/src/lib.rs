//! Property suite shared by every strategy in the workspace.

use std::cmp::Ordering;

/// What the suite needs to know about a strategy under test.
///
/// Every function is associated rather than a method, so that a property can be instantiated per
/// strategy as a plain `fn()` test.
pub trait Sort {
    /// Label used in failure messages.
    fn name() -> String;

    /// Whether elements comparing equal must keep their input order.
    fn is_stable() -> bool;

    fn sort<T: Ord>(arr: &mut [T]);

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], compare: F);
}

pub mod patterns;
