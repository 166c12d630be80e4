//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//!
//! # Methods
//!
//! # [backjump](GenericContext::backjump) --- Backjump to a target level
//!
//! Performs a backjump to some level.
//!
//! For sound application the target level must be equal to or lower than the current level.
//! Still, passing a target level greater than the current level is safe --- nothing will happen.
//!
//! # [backjump_level](GenericContext::non_chronological_backjump_level) --- The backjump level of a(n unsatisfiable) clause
//!
//! The backjump level of a clause is the second highest decision level from the literals of the clause, if the clause contains at least two literals, and 0 (zero) otherwise.
//!
//! For a clause from [analysis](crate::procedures::analysis) exactly one literal is from the highest level, and so the backjump level is the highest level of the remaining literals.
//! After the backjump every literal other than the asserted literal remains false, and the clause is unit on the asserted literal.
//!
//! # Example
//!
//! ```rust,ignore
//! if let AssertingClause { clause, .. } = result {
//!     let index = self.non_chronological_backjump_level(&clause)?;
//!     self.backjump(index);
//! }
//! ```

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        let from = self.atom_db.level();
        let dropped = self.atom_db.unassign_above(target);
        log::trace!(target: targets::BACKJUMP, "Backjump from {from} to {target}, dropping {dropped} values");

        if target < from {
            self.counters.total_backjumps += 1;
        }
    }

    /// The non-chronological backjump level of a unsatisfiable clause.
    ///
    /// An error is returned if some literal of the clause has no value.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn non_chronological_backjump_level(
        &self,
        clause: &impl Clause,
    ) -> Result<LevelIndex, err::ErrorKind> {
        // An ordered record of the top two decision levels: (second_to_top, top)
        let mut top_two = (None, None);
        for literal in clause.literals() {
            let Some(dl) = self.atom_db.level_of(literal.atom()) else {
                log::error!(target: targets::BACKJUMP, "{literal} was not chosen");
                return Err(err::ErrorKind::Backjump);
            };

            match top_two {
                (_, None) => top_two.1 = Some(dl),
                (_, Some(the_top)) if dl > the_top => {
                    top_two.0 = top_two.1;
                    top_two.1 = Some(dl);
                }
                (None, _) => top_two.0 = Some(dl),
                (Some(second_to_top), _) if dl > second_to_top => top_two.0 = Some(dl),
                _ => {}
            }
        }

        Ok(top_two.0.unwrap_or(0))
    }
}

#[cfg(test)]
mod backjump_tests {
    use crate::{config::Config, context::Context};

    use super::*;

    fn three_levels() -> Context {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.fresh_atoms(4).is_ok());
        ctx.atom_db.assign(4, None, 0);
        assert!(ctx.decide(-1).is_ok());
        assert!(ctx.decide(-2).is_ok());
        assert!(ctx.decide(-3).is_ok());
        ctx
    }

    #[test]
    fn second_highest_level() {
        let ctx = three_levels();

        assert_eq!(ctx.non_chronological_backjump_level(&vec![3, 1]), Ok(1));
        assert_eq!(ctx.non_chronological_backjump_level(&vec![1, 3, 2]), Ok(2));
        assert_eq!(ctx.non_chronological_backjump_level(&vec![3, -4]), Ok(0));
        assert_eq!(ctx.non_chronological_backjump_level(&vec![3]), Ok(0));
    }

    #[test]
    fn unvalued_literal() {
        let mut ctx = three_levels();
        ctx.backjump(1);
        assert_eq!(
            ctx.non_chronological_backjump_level(&vec![3, 1]),
            Err(err::ErrorKind::Backjump)
        );
    }

    #[test]
    fn backjump_drops_levels() {
        let mut ctx = three_levels();
        ctx.backjump(1);

        assert_eq!(ctx.atom_db.level(), 1);
        assert_eq!(ctx.value_of(1), Some(false));
        assert_eq!(ctx.value_of(2), None);
        assert_eq!(ctx.value_of(4), Some(true));
        assert_eq!(ctx.counters.total_backjumps, 1);

        ctx.backjump(2);
        assert_eq!(ctx.atom_db.level(), 1);
        assert_eq!(ctx.counters.total_backjumps, 1);
    }
}
