use crate::types::err::{self};

/// The index to a clause in the formula.
pub type FormulaIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// The clause database is append-only, so a key remains valid (and refers to the same clause) for the lifetime of the database.
/// In particular, an [assignment](crate::db::atom::Assignment) may hold the key of its antecedent without concern for the clause being removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(pub(crate) FormulaIndex);

impl ClauseKey {
    /// A key from the position of a clause in the database, if the position is representable.
    pub(crate) fn from_position(position: usize) -> Result<Self, err::ClauseDBError> {
        match FormulaIndex::try_from(position) {
            Ok(index) => Ok(ClauseKey(index)),
            Err(_) => Err(err::ClauseDBError::StorageExhausted),
        }
    }

    /// The index of the clause.
    pub fn index(&self) -> FormulaIndex {
        self.0
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
