//! A library for determining the satisfiability of boolean formulas written
//! in conjunctive normal form, with hooks for cooperation with an external
//! theory solver.
//!
//! marten_sat implements conflict-driven clause-learning (CDCL) solving:
//! watched-literal propagation, first-UIP conflict analysis, an activity
//! ordering over decisions, non-chronological backtracking, and restarts on a
//! growing conflict budget.
//! In addition, a solve may be linked to an external theory solver in the
//! CDCL(T) manner: the theory solver is consulted at each propagation
//! fixpoint with the assignments made since its previous consultation, may
//! return conflict clauses for the solver to learn from, is notified when
//! assignments it has been told of are undone, and may hint the polarity of
//! decisions.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built from a configuration, atoms and clauses are added
//! programmatically, and a solve is requested with [solve](crate::context::GenericContext::solve).
//!
//! Internally, and at a high level, a solve is viewed in terms of
//! manipulation of, and relationships between, a handful of databases which
//! instantiate core theoretical objects:
//! - A formula is stored in the [clause database](crate::db::clause).
//! - A valuation is stored in the [atom database](crate::db::atom).
//! - Assignments, in order, are stored on the [trail](crate::db::trail).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect
//!   the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a
//!   solve.
//! - The [structures] to familiarise yourself with the abstract elements of a
//!   solve and their representation (atoms, literals, clauses).
//! - The [callbacks](crate::context::callbacks) to link a solve to a theory
//!   solver.
//!
//! # Example
//!
//! ```rust
//! # use marten_sat::config::Config;
//! # use marten_sat::context::Context;
//! # use marten_sat::reports::Report;
//! # use marten_sat::structures::literal::{CLiteral, Literal};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = the_context.fresh_atom("p").unwrap();
//! let q = the_context.fresh_atom("q").unwrap();
//!
//! let p_or_q = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
//! assert!(the_context.add_clause(p_or_q).is_ok());
//! assert!(the_context.add_clause(CLiteral::new(q, false)).is_ok());
//!
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Satisfiable);
//! assert_eq!(the_context.value_of(p), Some(true));
//! assert_eq!(the_context.value_of(q), Some(false));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made,
//! and a variety of targets are defined in order to help narrow output to
//! relevant parts of the library.
//! The targets are listed in [misc::log], and no log implementation is
//! provided.
//!
//! For example, when used with env_logger logs related to propagation can be
//! filtered with `RUST_LOG=propagation …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub mod reports;
