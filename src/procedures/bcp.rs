/*!
Boolean constraint propagation (BCP), implemented with watched literals.

# Overview

Each clause watches (up to) two of its literals, and the watched literals of a
clause are kept at the first two positions of the clause by in-clause swaps.

When a literal is assigned, each clause watching the negation of the literal
is inspected, as the clause may now be unit or unsatisfied.
For each such clause, with the falsified watch swapped to position zero:

- If the position one watch is satisfied, the clause is fine as watched.
- Otherwise, if some other literal of the clause is not falsified, the watch
  moves to that literal and the clause needs no further attention until the
  new watch is falsified.
- Otherwise, every literal other than (perhaps) the position one watch is
  falsified:
  + If the position one watch has no value, the clause is unit, and the watch
    is assigned with the clause as its reason.
  + If the position one watch is falsified (or the clause is a unit clause)
    the clause is unsatisfied, a conflict.

On a conflict, propagation halts: the remaining watchers (the conflicting
clause included) are retained and the propagation queue is drained.

# Borrows

The watch list of the falsified literal is taken wholesale from the watch
database and the watches to keep are restored wholesale.
This keeps the loop free of any borrow of the watch database, so clauses and
the valuation may be freely revised, and mirrors how lists are rebuilt anyway
as watches move.
*/

use crate::{
    context::GenericContext,
    db::{AssignmentSource, atom::AtomValue},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// How a clause watching a falsified literal stands with respect to the
/// valuation.
enum WatchStatus {
    /// The other watch is satisfied, keep the watch as is.
    Witness,

    /// The watch moved to a literal without a value.
    Moved,

    /// The clause is unit, asserting the contained literal.
    Implication(CLiteral),

    /// The clause is unsatisfied.
    Conflict,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates every queued assignment, or returns the first conflict
    /// found.
    ///
    /// On a conflict the queue is drained, so a following call would do
    /// nothing until fresh assignments are made.
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.next_in_queue() {
            self.trail.q_head += 1;
            log::trace!(target: targets::PROPAGATION, "Propagating {literal}");

            match self.bcp(literal) {
                Ok(()) => {}
                Err(err) => {
                    self.trail.q_head = self.trail.assignment_count();
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Inspects every clause watching the negation of `literal`, to be called
    /// when `literal` is assigned.
    ///
    /// See [procedures::bcp](crate::procedures::bcp) for documentation.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let falsified = literal.negate();
        let watchers = self.watches.take_list(falsified);
        let mut kept = Vec::with_capacity(watchers.len());

        let mut index = 0;
        while index < watchers.len() {
            let key = watchers[index];
            index += 1;

            let status = {
                let clause = match self.clause_db.get_mut(&key) {
                    Ok(clause) => clause,
                    Err(_) => {
                        log::error!(target: targets::PROPAGATION, "Lost watcher of {falsified}: {key}");
                        self.watches.restore_list(falsified, kept);
                        return Err(err::BCPError::CorruptWatch);
                    }
                };

                if clause.len() >= 2 && clause.literal_at(0) != falsified {
                    clause.swap(0, 1);
                }

                let other_watch = match clause.len() {
                    1 => None,
                    _ => Some(clause.literal_at(1)),
                };

                match other_watch {
                    Some(other) if self.atom_db.value_status(other) == AtomValue::Same => {
                        WatchStatus::Witness
                    }

                    _ => {
                        let mut replacement = None;
                        for position in 2..clause.len() {
                            let candidate = clause.literal_at(position);
                            if self.atom_db.value_status(candidate) != AtomValue::Different {
                                replacement = Some(position);
                                break;
                            }
                        }

                        match replacement {
                            Some(position) => {
                                clause.swap(0, position);
                                self.watches.watch(clause.literal_at(0), key);
                                WatchStatus::Moved
                            }

                            None => match other_watch {
                                Some(other)
                                    if self.atom_db.value_status(other) == AtomValue::NotSet =>
                                {
                                    WatchStatus::Implication(other)
                                }
                                _ => WatchStatus::Conflict,
                            },
                        }
                    }
                }
            };

            match status {
                WatchStatus::Witness => kept.push(key),

                WatchStatus::Moved => {}

                WatchStatus::Implication(implied) => {
                    kept.push(key);
                    log::trace!(target: targets::PROPAGATION, "Implication {implied} from {key}");
                    self.record_assignment(implied, AssignmentSource::BCP(key));
                }

                WatchStatus::Conflict => {
                    log::trace!(target: targets::PROPAGATION, "Conflict at {key}");
                    kept.push(key);
                    kept.extend_from_slice(&watchers[index..]);
                    self.watches.restore_list(falsified, kept);
                    return Err(err::BCPError::Conflict(key));
                }
            }
        }

        self.watches.restore_list(falsified, kept);
        Ok(())
    }
}
