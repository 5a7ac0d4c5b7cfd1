//! Strategies that may reorder elements comparing equal.

pub mod quick;
pub mod selection;
