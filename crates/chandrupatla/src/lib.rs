//! # Chandrupatla
//!
//! Bracketed scalar root finding with Chandrupatla's method.
//!
//! This crate provides:
//!
//! - **Solvers**: [`chandrupatla`](solvers::chandrupatla()), an alternative to
//!   Brent's method that combines inverse quadratic interpolation with
//!   bisection safeguards
//! - **Configuration**: [`SolverConfig`](solvers::SolverConfig) with absolute
//!   and relative tolerances and an iteration budget
//! - **Observation**: per-iteration [`Step`](solvers::Step) reports through the
//!   [`Observer`](solvers::Observer) trait
//!
//! ## Design Philosophy
//!
//! - **Pure**: no I/O, no shared state; every call owns its iteration state
//! - **Bounded**: the iteration budget is the only timeout
//! - **Distinct failures**: a bad bracket and a failure to converge are
//!   different [`RootFindingError`] variants
//!
//! ## Example
//!
//! ```rust
//! use chandrupatla::solvers::solve;
//!
//! // x = cos(x)
//! let root = solve(|x: f64| x - x.cos(), 0.0, 1.0, 0.0, 1e-12, 20).unwrap();
//! assert!((root - 0.739_085_133_215_160_7).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RootFindingError, RootFindingResult};
    pub use crate::solvers::{
        chandrupatla, chandrupatla_observed, solve, ChandrupatlaSolver, Method, Observer,
        RootFinder, SolverConfig, SolverResult, Step,
    };
}

pub use error::{RootFindingError, RootFindingResult};
