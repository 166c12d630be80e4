//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//!
//! The evaluation of a clause on a valuation, used throughout, is given by [status](crate::structures::clause::Clause::status).

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod solve;
