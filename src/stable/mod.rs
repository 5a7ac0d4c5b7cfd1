//! Strategies that keep elements comparing equal in their input order.

pub mod bubble;
pub mod insertion;
pub mod merge;
