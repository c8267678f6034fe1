//! Bracketed root-finding.
//!
//! This module provides Chandrupatla's method for finding a root of a scalar
//! function inside an interval where the function changes sign:
//!
//! - [`chandrupatla()`]: full result with iteration statistics
//! - [`chandrupatla_observed`]: same, reporting every iteration to an [`Observer`]
//! - [`solve`]: plain root from explicit tolerances
//!
//! # Choosing Tolerances
//!
//! Convergence is accepted once the bracket width is within
//! `max(rel_tolerance * |x|, abs_tolerance)`, where `x` is the current best
//! estimate.
//!
//! | Setting | Meaning |
//! |---------|---------|
//! | `rel_tolerance = 1e-12` | Roughly 12 significant figures |
//! | `abs_tolerance > 0` | Required when the root may be exactly zero |
//!
//! A tolerance finer than the floating-point spacing near the root cannot be
//! met; the solver then runs out of iterations and reports
//! [`RootFindingError::ConvergenceFailed`].
//!
//! # Example
//!
//! ```rust
//! use chandrupatla::solvers::{chandrupatla, SolverConfig};
//!
//! let f = |x: f64| (x + 3.0) * (x - 1.0).powi(2);
//! let config = SolverConfig::new(0.0, 1e-12, 25);
//!
//! let result = chandrupatla(f, -4.0, 4.0 / 3.0, &config).unwrap();
//! assert_eq!(result.root, -3.0);
//! assert_eq!(result.iterations, 8);
//! ```

mod chandrupatla;
mod observe;
mod sign;

pub use chandrupatla::{chandrupatla, chandrupatla_observed, solve};
pub use observe::{Method, Observer, Step};

use crate::error::{RootFindingError, RootFindingResult};

/// Default absolute tolerance.
pub const DEFAULT_ABS_TOLERANCE: f64 = 0.0;

/// Default relative tolerance.
pub const DEFAULT_REL_TOLERANCE: f64 = 1e-12;

/// Default maximum iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Acceptable absolute error in the root.
    pub abs_tolerance: f64,
    /// Acceptable relative error in the root.
    pub rel_tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            abs_tolerance: DEFAULT_ABS_TOLERANCE,
            rel_tolerance: DEFAULT_REL_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(abs_tolerance: f64, rel_tolerance: f64, max_iterations: u32) -> Self {
        Self {
            abs_tolerance,
            rel_tolerance,
            max_iterations,
        }
    }

    /// Sets the absolute tolerance.
    #[must_use]
    pub fn with_abs_tolerance(mut self, abs_tolerance: f64) -> Self {
        self.abs_tolerance = abs_tolerance;
        self
    }

    /// Sets the relative tolerance.
    #[must_use]
    pub fn with_rel_tolerance(mut self, rel_tolerance: f64) -> Self {
        self.rel_tolerance = rel_tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validates that both tolerances are finite and non-negative and that
    /// at least one iteration is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`RootFindingError::InvalidInput`] describing the first
    /// offending field.
    pub fn validate(&self) -> RootFindingResult<()> {
        if !self.abs_tolerance.is_finite() || self.abs_tolerance < 0.0 {
            return Err(RootFindingError::invalid_input(
                "abs_tolerance must be finite and non-negative",
            ));
        }
        if !self.rel_tolerance.is_finite() || self.rel_tolerance < 0.0 {
            return Err(RootFindingError::invalid_input(
                "rel_tolerance must be finite and non-negative",
            ));
        }
        if self.max_iterations == 0 {
            return Err(RootFindingError::invalid_input(
                "max_iterations must be positive",
            ));
        }
        Ok(())
    }
}

/// Result of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used (zero when an endpoint is an exact root).
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
    /// Lower end of the final bracket.
    pub lower: f64,
    /// Upper end of the final bracket.
    pub upper: f64,
}

impl SolverResult {
    /// Returns the width of the final bracket.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Trait for bracketing root finders.
pub trait RootFinder {
    /// Finds a root of `f` inside the interval spanned by `x0` and `x1`.
    ///
    /// # Arguments
    ///
    /// * `f` - The function for which to find a root
    /// * `x0` - One end of the initial interval
    /// * `x1` - The other end of the initial interval
    fn find_root<F>(&self, f: F, x0: f64, x1: f64) -> RootFindingResult<SolverResult>
    where
        F: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Chandrupatla's method bound to a fixed configuration.
///
/// # Example
///
/// ```rust
/// use chandrupatla::solvers::{ChandrupatlaSolver, RootFinder, SolverConfig};
///
/// let solver = ChandrupatlaSolver::new(SolverConfig::default().with_max_iterations(50));
/// let result = solver.find_root(|x: f64| x * x - 2.0, 1.0, 2.0).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChandrupatlaSolver {
    config: SolverConfig,
}

impl ChandrupatlaSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds a root, reporting every iteration to `observer`.
    pub fn find_root_observed<F, O>(
        &self,
        f: F,
        x0: f64,
        x1: f64,
        observer: O,
    ) -> RootFindingResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        O: Observer,
    {
        chandrupatla_observed(f, x0, x1, &self.config, observer)
    }
}

impl RootFinder for ChandrupatlaSolver {
    fn find_root<F>(&self, f: F, x0: f64, x1: f64) -> RootFindingResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        chandrupatla(f, x0, x1, &self.config)
    }

    fn name(&self) -> &'static str {
        "Chandrupatla"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_abs_tolerance(1e-9)
            .with_rel_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.abs_tolerance - 1e-9).abs() < f64::EPSILON);
        assert!((config.rel_tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_tolerance() {
        let config = SolverConfig::default().with_abs_tolerance(-1e-6);
        assert!(matches!(
            config.validate(),
            Err(RootFindingError::InvalidInput { .. })
        ));

        let config = SolverConfig::default().with_rel_tolerance(-1e-6);
        assert!(matches!(
            config.validate(),
            Err(RootFindingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_tolerance() {
        let config = SolverConfig::default().with_rel_tolerance(f64::NAN);
        assert!(config.validate().is_err());

        let config = SolverConfig::default().with_abs_tolerance(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = SolverConfig::default().with_max_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(RootFindingError::InvalidInput { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let config = SolverConfig::new(1e-9, 1e-12, 40);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"max_iterations\":40"));

        let parsed: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_root_finder_trait() {
        let solver = ChandrupatlaSolver::default();
        let f = |x: f64| x * x - 2.0;

        let result = solver.find_root(f, 1.0, 2.0).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert_eq!(solver.name(), "Chandrupatla");
    }

    #[test]
    fn test_find_root_observed_counts_steps() {
        let solver = ChandrupatlaSolver::new(SolverConfig::new(0.0, 1e-12, 20));
        let mut steps = 0;

        let result = solver
            .find_root_observed(|x: f64| x - x.cos(), 0.0, 1.0, |_: &Step| steps += 1)
            .unwrap();

        assert_eq!(steps, result.iterations);
    }

    #[test]
    fn test_result_width() {
        let result = SolverResult {
            root: 1.0,
            iterations: 3,
            residual: 0.0,
            lower: 0.75,
            upper: 1.25,
        };
        assert_relative_eq!(result.width(), 0.5);
    }

    // ============ Financial Root Tests ============

    /// Helper to calculate bond price from yield
    fn bond_price(yield_rate: f64, coupon: f64, face: f64, years: i32, freq: i32) -> f64 {
        let periods = years * freq;
        let coupon_per_period = coupon / f64::from(freq);
        let discount_rate = yield_rate / f64::from(freq);

        let mut pv = 0.0;
        for t in 1..=periods {
            pv += coupon_per_period / (1.0 + discount_rate).powi(t);
        }
        pv += face / (1.0 + discount_rate).powi(periods);
        pv
    }

    #[test]
    fn test_ytm_par_bond() {
        // A bond trading at par has YTM equal to its coupon rate
        let f = |y: f64| bond_price(y, 5.0, 100.0, 10, 2) - 100.0;

        let result = chandrupatla(f, 0.0, 0.20, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.05, epsilon = 1e-10);
    }

    #[test]
    fn test_ytm_discount_bond() {
        let f = |y: f64| bond_price(y, 5.0, 100.0, 5, 2) - 95.0;

        let result = chandrupatla(f, 0.0, 0.20, &SolverConfig::default()).unwrap();

        assert!(result.root > 0.05);
        assert!(f(result.root).abs() < 1e-8);
    }

    #[test]
    fn test_z_spread_like_calculation() {
        // Constant spread over a flat 3% zero curve
        let zero_rate = 0.03;
        let price_with_spread = |spread: f64| {
            let mut pv = 0.0;
            for t in 1..=5 {
                pv += 5.0 * (-((zero_rate + spread) * f64::from(t))).exp();
            }
            pv + 100.0 * (-((zero_rate + spread) * 5.0)).exp()
        };
        let f = |spread: f64| price_with_spread(spread) - 97.0;

        let result = chandrupatla(f, -0.05, 0.10, &SolverConfig::default()).unwrap();

        assert!(result.root > 0.0);
        assert!(f(result.root).abs() < 1e-8);
    }
}
