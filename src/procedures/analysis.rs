/*!
Conflict analysis, by resolution to the first unique implication point.

# Overview

A conflict clause is false on the current valuation, and (above level zero)
at least one of its literals was falsified at the current decision level.
Analysis walks the trail backwards from the conflict, resolving the working
clause against the antecedent of each current-level literal met, until a
single current-level literal remains --- the first unique implication point.

Literals of the working clause valued at lower levels are retained in the
learnt clause, the activities of their atoms are bumped, and the maximum
level among them is the backjump level: the level at which the learnt clause
asserts the negation of the implication point.

The negation of the implication point is placed at the front of the learnt
clause, so the clause is watched on the asserted literal when stored.

# Conflicts

Analysis is indifferent to the source of the conflict clause: a clause from
the clause database and a clause returned by a theory solver are treated
alike, so the working clause is passed by value.
*/

use crate::{
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A conflict met during a solve, tagged by source.
#[derive(Debug)]
pub enum Conflict {
    /// A clause of the clause database was found unsatisfied during BCP.
    Boolean(ClauseKey),

    /// A theory solver returned a conflict clause.
    /// The clause is ephemeral: only the learnt clause derived from it is
    /// stored.
    Theory(CClause),
}

/// The result of successful analysis: an asserting clause and the level to
/// backjump to.
pub struct Analysis {
    /// The learnt clause, with the asserted literal at position zero.
    pub clause: CClause,

    /// The maximum level among the retained (non-asserted) literals.
    pub backjump_level: LevelIndex,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Analyses a conflict, returning an asserting clause and backjump level.
    ///
    /// # Soundness
    /// To be called above level zero: a conflict at level zero settles
    /// unsatisfiability and analysis is not required.
    pub fn conflict_analysis(&mut self, conflict: CClause) -> Result<Analysis, err::AnalysisError> {
        let current_level = self.trail.level();
        log::trace!(target: targets::ANALYSIS, "Analysis at level {current_level}: {}", conflict.as_string());

        let mut seen = vec![false; self.atom_db.count()];
        let mut learnt: CClause = Vec::default();
        let mut backjump_level: LevelIndex = 0;

        // A count of current-level literals of the working clause not yet
        // resolved on.
        let mut path_count: usize = 0;
        let mut trail_index = self.trail.assignment_count();
        let mut resolved: Option<CLiteral> = None;
        let mut working = conflict;

        loop {
            for literal in &working {
                if resolved.is_some_and(|pivot| *literal == pivot) {
                    continue;
                }
                let atom = literal.atom();
                if seen[atom as usize] {
                    continue;
                }
                seen[atom as usize] = true;

                let Some(level) = self.atom_db.decision_level_of(atom) else {
                    log::error!(target: targets::ANALYSIS, "{literal} has no value");
                    return Err(err::AnalysisError::UnvaluedLiteral);
                };

                if level == current_level {
                    path_count += 1;
                } else {
                    self.atom_db.bump_activity(atom);
                    backjump_level = backjump_level.max(level);
                    learnt.push(*literal);
                }
            }

            if path_count == 0 {
                log::error!(target: targets::ANALYSIS, "No literal of the conflict at level {current_level}");
                return Err(err::AnalysisError::NoAssertion);
            }
            path_count -= 1;

            // The most recent assignment with a seen atom is at the current
            // level, as every seen current-level atom is above the level
            // boundary and at least one remains.
            loop {
                if trail_index == 0 {
                    return Err(err::AnalysisError::NoAssertion);
                }
                trail_index -= 1;
                if seen[self.trail.literals[trail_index].atom() as usize] {
                    break;
                }
            }

            let pivot = self.trail.literals[trail_index];
            seen[pivot.atom() as usize] = false;
            resolved = Some(pivot);

            if path_count == 0 {
                break;
            }

            let Some(reason) = self.atom_db.reason_of(pivot.atom()) else {
                log::error!(target: targets::ANALYSIS, "{pivot} resolved on without an antecedent");
                return Err(err::AnalysisError::MissingAntecedent);
            };
            working = match self.clause_db.get(&reason) {
                Ok(clause) => clause.literals().to_vec(),
                Err(_) => return Err(err::AnalysisError::LostClause),
            };
        }

        let Some(pivot) = resolved else {
            return Err(err::AnalysisError::EmptyResolution);
        };

        // The asserted literal is moved to the front, as the first (up to)
        // two literals of a stored clause are watched.
        learnt.push(pivot.negate());
        let last = learnt.len() - 1;
        learnt.swap(0, last);

        self.atom_db.exponent_activity();

        log::trace!(target: targets::ANALYSIS, "Learnt {} with backjump level {backjump_level}", learnt.as_string());
        Ok(Analysis {
            clause: learnt,
            backjump_level,
        })
    }
}
