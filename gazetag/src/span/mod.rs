//! Span model, conflict resolution and BILOU projection.
//!
//! A [`Span`] covers a contiguous token range `[start, end)` and carries one or
//! more entity labels. Candidate spans produced by a matcher may overlap;
//! [`resolve`] selects a disjoint subset and [`tag`] renders that subset as one
//! BILOU tag per token.

mod bilou;
mod resolver;
mod types;
mod validation;

pub use bilou::*;
pub use resolver::*;
pub use types::*;
pub use validation::*;
