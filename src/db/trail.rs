//! The order in which atoms were assigned values, split into decision levels.

use crate::structures::literal::CLiteral;

use super::LevelIndex;

/// A record of assignments, in order of assignment.
///
/// `level_indicies[i]` is the position in `literals` of the decision which opened level `i + 1`.
/// Everything before `level_indicies[0]` was assigned at level zero.
#[derive(Default)]
pub struct Trail {
    /// Every assignment, in order, represented as a literal.
    pub literals: Vec<CLiteral>,

    /// The start of each level above zero.
    pub level_indicies: Vec<usize>,
}

impl Trail {
    /// Stores an assignment at the top level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Opens a fresh level, whose first assignment will be the next stored.
    pub fn open_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// The assignments made at the (current) top level, in order of assignment.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        match self.level_indicies.last() {
            Some(&level_start) => &self.literals[level_start..],
            None => &self.literals,
        }
    }

    /// Removes levels above the given level, returning the assignments made on those levels.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of any atom.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // Level i + 1 starts at level_indicies[i], so everything above `level` starts at level_indicies[level].
        match self.level_indicies.get(level as usize) {
            Some(&level_start) => {
                self.level_indicies.truncate(level as usize);
                self.literals.split_off(level_start)
            }
            None => Vec::default(),
        }
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;

    #[test]
    fn clear_above() {
        let mut trail = Trail::default();
        trail.store_assignment(1);
        trail.open_level();
        trail.store_assignment(-2);
        trail.store_assignment(3);
        trail.open_level();
        trail.store_assignment(4);

        assert_eq!(trail.level(), 2);
        assert_eq!(trail.top_level_assignments(), &[4]);
        assert_eq!(trail.level_indicies, vec![1, 3]);

        assert_eq!(trail.clear_assignments_above(2), Vec::<CLiteral>::default());
        assert_eq!(trail.clear_assignments_above(0), vec![-2, 3, 4]);
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.literals, vec![1]);
    }
}
