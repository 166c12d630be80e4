//! Generic structures, independent of satisfiability.

pub mod random;
