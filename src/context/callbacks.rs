/*!
General callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.

```rust
# use cdcl_sat::context::Context;
# use cdcl_sat::config::Config;
# use std::{cell::RefCell, rc::Rc};
let mut the_context = Context::from_config(Config::default());
let decisions = Rc::new(RefCell::new(Vec::default()));

let decision_record = decisions.clone();
the_context.set_callback_decision(Box::new(move |literal| decision_record.borrow_mut().push(literal)));
```
*/

use crate::{
    db::LevelIndex,
    structures::{clause::CClause, literal::CLiteral},
};

use super::GenericContext;

/// Asked at the top of each iteration of a solve, and the solve stops if true is returned.
pub type CallbackTerminate = dyn FnMut() -> bool;

/// Passed each learned clause, together with the level of the conflict and the level backjumped to.
pub type CallbackOnLearned = dyn FnMut(&CClause, LevelIndex, LevelIndex);

/// Passed each decision, as a literal.
pub type CallbackOnDecision = dyn FnMut(CLiteral);

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        match &mut self.callback_terminate {
            Some(callback) => callback(),
            None => false,
        }
    }

    pub fn set_callback_learned(&mut self, callback: Box<CallbackOnLearned>) {
        self.callback_learned = Some(callback);
    }

    pub(crate) fn make_callback_learned(
        &mut self,
        clause: &CClause,
        conflict_level: LevelIndex,
        backjump_level: LevelIndex,
    ) {
        if let Some(callback) = &mut self.callback_learned {
            callback(clause, conflict_level, backjump_level);
        }
    }

    pub fn set_callback_decision(&mut self, callback: Box<CallbackOnDecision>) {
        self.callback_decision = Some(callback);
    }

    pub(crate) fn make_callback_decision(&mut self, literal: CLiteral) {
        if let Some(callback) = &mut self.callback_decision {
            callback(literal);
        }
    }
}
