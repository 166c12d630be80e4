//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A formula 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//!
//! The conjunction of clauses in the [clause database](crate::db::clause) is a formula, which is always entailed by the formula given to the context, as every other clause in the database is derived by resolution.
//!
//! ## Values
//!
//! Atoms take one of two values, [true] or [false], and a [valuation] is a partial function from atoms to these values.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
