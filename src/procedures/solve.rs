/*!
Determines the satisfiability of the formula in a context.

# Overview

The core loop interleaves three procedures:

1. [Propagation](crate::procedures::bcp), to settle the boolean consequences
   of the current valuation.
2. [Theory consultation](crate::procedures::theory), at each propagation
   fixpoint.
3. [Decisions](crate::procedures::decision), when neither complains.

A conflict from (1) or (2) above level zero is
[analysed](crate::procedures::analysis): the learnt clause is stored, a
[backjump](crate::procedures::backjump) is made to the asserting level, and
the asserted literal is queued with the learnt clause as its reason.
A conflict at level zero settles unsatisfiability, and an exhausted valuation
with no conflict settles satisfiability.

# Restarts

The loop runs under a conflict budget.
When the budget is spent the search restarts: decisions are undone (the
clause database and valuation cache are kept) and the budget grows by a
configured factor, so the search is complete in the limit.

Roughly, the loop is as diagrammed:

```none
          +---------------+
  +-------| make_decision |------> satisfiable, if the valuation is complete
  |       +---------------+
  |               ⌃
  |               | no conflict
  |               |
  ⌄   +-----------------------+
--+-->| propagate and consult |
  ⌃   +-----------------------+
  |               |
  |               | conflict
  |               |
  |               +-------------> unsatisfiable, if at level zero
  |               ⌄
  |   +----------------------+
  +---| analyse and backjump |
      +----------------------+
```
*/

use crate::{
    context::{ContextState, GenericContext},
    db::AssignmentSource,
    db::clause::ClauseSource,
    procedures::{
        analysis::Conflict,
        decision::DecisionOk,
        theory::TheoryOk,
    },
    reports::Report,
    structures::literal::Literal,
    types::err::{self},
};

/// Possible 'Ok' results from a budgeted search.
pub enum SearchOk {
    /// A complete valuation with no conflict.
    Satisfiable,

    /// A conflict at decision level zero.
    Unsatisfiable,

    /// The conflict budget was spent.
    BudgetExhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// May be called again after further clauses are added: decisions from a
    /// previous solve are cleared and fixed assignments are re-propagated, so
    /// clauses added since are taken into account.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        self.state = ContextState::Solving;
        self.backjump(0);
        self.trail.q_head = 0;

        let mut budget = self.config.conflict_budget;

        'restart_loop: loop {
            match self.bounded_search(budget)? {
                SearchOk::Satisfiable => {
                    self.state = ContextState::Satisfiable;
                    break 'restart_loop;
                }

                SearchOk::Unsatisfiable => {
                    self.state = ContextState::Unsatisfiable;
                    break 'restart_loop;
                }

                SearchOk::BudgetExhausted => {
                    self.counters.restarts += 1;
                    if self.config.restarts {
                        self.backjump(0);
                    }
                    budget = (budget as f64 * self.config.budget_growth) as u32;
                    log::trace!("Restart {} with a budget of {budget}", self.counters.restarts);
                }
            }
        }

        Ok(self.report())
    }

    /// Searches until satisfiability is settled or `budget` conflicts have
    /// been met.
    pub fn bounded_search(&mut self, budget: u32) -> Result<SearchOk, err::ErrorKind> {
        self.counters.fresh_conflicts = 0;

        'search_loop: loop {
            if self.counters.fresh_conflicts >= budget {
                return Ok(SearchOk::BudgetExhausted);
            }
            self.counters.total_iterations += 1;

            let conflict = match self.propagate() {
                Ok(()) => match self.consult_theory() {
                    TheoryOk::Consistent => None,
                    TheoryOk::Conflict(clause) => Some(Conflict::Theory(clause)),
                },
                Err(err::BCPError::Conflict(key)) => Some(Conflict::Boolean(key)),
                Err(err) => return Err(err.into()),
            };

            match conflict {
                None => match self.make_decision() {
                    DecisionOk::Literal(decision) => {
                        self.trail.new_level();
                        self.record_assignment(decision, AssignmentSource::Decision);
                        continue 'search_loop;
                    }
                    DecisionOk::Exhausted => return Ok(SearchOk::Satisfiable),
                },

                Some(conflict) => {
                    self.counters.total_conflicts += 1;
                    self.counters.fresh_conflicts += 1;

                    if self.trail.level() == 0 {
                        return Ok(SearchOk::Unsatisfiable);
                    }

                    let working = match conflict {
                        Conflict::Boolean(key) => match self.clause_db.get(&key) {
                            Ok(clause) => clause.literals().to_vec(),
                            Err(err) => return Err(err.into()),
                        },
                        Conflict::Theory(clause) => clause,
                    };

                    let analysis = self.conflict_analysis(working)?;
                    self.backjump(analysis.backjump_level);

                    let asserted = analysis.clause[0];
                    let key = self.clause_db.store(
                        analysis.clause,
                        ClauseSource::Resolution,
                        &mut self.watches,
                    )?;
                    debug_assert!(self.value_of(asserted.atom()).is_none());
                    self.record_assignment(asserted, AssignmentSource::BCP(key));
                }
            }
        }
    }
}
