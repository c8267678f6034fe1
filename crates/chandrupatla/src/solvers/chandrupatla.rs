//! Chandrupatla's root-finding algorithm.

use log::{debug, trace, warn};

use super::observe::{Method, Observer, Step};
use super::sign::same_strict_sign;
use super::{SolverConfig, SolverResult};
use crate::error::{RootFindingError, RootFindingResult};

/// Chandrupatla's root-finding algorithm.
///
/// Tracks three points: the newest sample `a`, the opposite bracket end `b`,
/// and the last displaced point `c`. Each iteration samples
/// `x = a + t * (b - a)`, where `t` comes from inverse quadratic
/// interpolation through the three points when they are curved consistently
/// enough, and `t = 0.5` (bisection) otherwise. `t` is then clamped so the
/// sample stays at least one tolerance away from either bracket end.
///
/// Requires: `f(x0)` and `f(x1)` are not both strictly positive or both
/// strictly negative. If either endpoint is an exact root it is returned
/// without iterating.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - One end of the initial interval
/// * `x1` - The other end of the initial interval
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics.
///
/// # Errors
///
/// - [`RootFindingError::InvalidInput`] if `config` fails
///   [`SolverConfig::validate`]; `f` is not evaluated
/// - [`RootFindingError::InvalidBracket`] if `f(x0)` and `f(x1)` are both
///   strictly positive or both strictly negative
/// - [`RootFindingError::ConvergenceFailed`] if `config.max_iterations`
///   iterations pass without meeting the tolerance
///
/// # Example
///
/// ```rust
/// use chandrupatla::solvers::{chandrupatla, SolverConfig};
///
/// // x = cos(x)
/// let f = |x: f64| x - x.cos();
///
/// let result = chandrupatla(f, 0.0, 1.0, &SolverConfig::new(0.0, 1e-12, 20)).unwrap();
/// assert!((result.root - 0.739_085_133_215_160_7).abs() < 1e-12);
/// ```
pub fn chandrupatla<F>(
    f: F,
    x0: f64,
    x1: f64,
    config: &SolverConfig,
) -> RootFindingResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    chandrupatla_observed(f, x0, x1, config, ())
}

/// Chandrupatla's algorithm, reporting each iteration to `observer`.
///
/// The observer sees one [`Step`] per iteration, including the final one.
/// Exact endpoint roots are returned before any step is reported.
///
/// # Example
///
/// ```rust
/// use chandrupatla::solvers::{chandrupatla_observed, SolverConfig, Step};
///
/// let f = |x: f64| (x + 3.0) * (x - 1.0).powi(2);
/// let mut brackets = Vec::new();
///
/// chandrupatla_observed(f, -4.0, 4.0 / 3.0, &SolverConfig::new(0.0, 1e-12, 25), |s: &Step| {
///     brackets.push(s.bracket());
/// })
/// .unwrap();
///
/// assert_eq!(brackets[0], (-4.0, -1.3333333333333333));
/// ```
#[allow(clippy::float_cmp)]
pub fn chandrupatla_observed<F, O>(
    f: F,
    x0: f64,
    x1: f64,
    config: &SolverConfig,
    mut observer: O,
) -> RootFindingResult<SolverResult>
where
    F: Fn(f64) -> f64,
    O: Observer,
{
    config.validate()?;

    let mut a = x1;
    let mut fa = f(a);
    let mut b = x0;
    let mut fb = f(b);

    debug!(
        "chandrupatla: bracket [{}, {}], abs_tol={:e}, rel_tol={:e}, max_iter={}",
        x0, x1, config.abs_tolerance, config.rel_tolerance, config.max_iterations
    );

    if same_strict_sign(fa, fb) {
        return Err(RootFindingError::InvalidBracket {
            a: x0,
            b: x1,
            fa: fb,
            fb: fa,
        });
    }

    // Exact roots at the endpoints never reach the sign comparison below
    if fb == 0.0 {
        debug!("chandrupatla: exact root at x0 = {}", b);
        return Ok(exact(b, fb, a));
    }
    if fa == 0.0 {
        debug!("chandrupatla: exact root at x1 = {}", a);
        return Ok(exact(a, fa, b));
    }

    let mut c: f64;
    let mut fc: f64;
    let mut t = 0.5;
    let mut method = Method::Bisection;

    for iteration in 1..=config.max_iterations {
        let xt = a + t * (b - a);
        let ft = f(xt);

        if same_strict_sign(ft, fa) {
            c = a;
            fc = fa;
        } else {
            c = b;
            fc = fb;
            b = a;
            fb = fa;
        }
        a = xt;
        fa = ft;

        let (x_m, f_m) = if fa.abs() < fb.abs() { (a, fa) } else { (b, fb) };

        let tolerance = (config.rel_tolerance * x_m.abs()).max(config.abs_tolerance);
        let t_l = tolerance / (a - b).abs();

        let step = Step {
            iteration,
            x: xt,
            fx: ft,
            method,
            lower: a.min(b),
            upper: a.max(b),
            best: x_m,
            f_best: f_m,
            tolerance,
        };
        trace!(
            "chandrupatla: iter {} {:?} x={} f={:e} bracket=[{}, {}]",
            iteration,
            method,
            xt,
            ft,
            step.lower,
            step.upper
        );
        observer.observe(&step);

        if t_l >= 1.0 || f_m == 0.0 {
            debug!(
                "chandrupatla: converged to {} after {} iterations",
                x_m, iteration
            );
            return Ok(SolverResult {
                root: x_m,
                iterations: iteration,
                residual: f_m,
                lower: step.lower,
                upper: step.upper,
            });
        }

        // Degenerate point sets give non-finite xi or phi and fail both tests
        let xi = (a - b) / (c - b);
        let phi = (fa - fb) / (fc - fb);

        if 1.0 - (1.0 - xi).sqrt() < phi && phi < xi.sqrt() {
            t = (fa / (fb - fa)) * (fc / (fb - fc))
                + ((c - a) / (b - a)) * (fa / (fc - fa)) * (fb / (fc - fb));
            method = Method::InverseQuadratic;
        } else {
            t = 0.5;
            method = Method::Bisection;
        }

        // Keep t in [t_l, 1 - t_l]; NaN bounds must not panic
        if t_l > 0.5 {
            t = 0.5;
            method = Method::Bisection;
        } else if t < t_l {
            t = t_l;
        } else if t > 1.0 - t_l {
            t = 1.0 - t_l;
        }
    }

    let (x_m, f_m) = if fa.abs() < fb.abs() { (a, fa) } else { (b, fb) };
    warn!(
        "chandrupatla: no root found after {} iterations (best {}, residual {:e})",
        config.max_iterations, x_m, f_m
    );

    Err(RootFindingError::convergence_failed(
        config.max_iterations,
        f_m.abs(),
        a.min(b),
        a.max(b),
    ))
}

/// Finds a root of `f` between `x0` and `x1`.
///
/// Shorthand for [`chandrupatla()`] with explicit tolerances that returns
/// only the root.
///
/// # Arguments
///
/// * `f` - The function to be solved
/// * `x0` - One end of the initial search interval
/// * `x1` - The other end of the initial search interval
/// * `abs_tolerance` - Acceptable absolute error in the root
/// * `rel_tolerance` - Acceptable relative error in the root
/// * `max_iterations` - Maximum number of iterations to perform
///
/// # Errors
///
/// Besides the bracket and convergence failures of [`chandrupatla()`], a
/// negative or non-finite tolerance or a zero `max_iterations` returns
/// [`RootFindingError::InvalidInput`] before `f` is evaluated.
///
/// # Example
///
/// ```rust
/// use chandrupatla::solvers::solve;
///
/// let root = solve(|x: f64| x * x * x - x - 2.0, 1.0, 2.0, 0.0, 1e-12, 50).unwrap();
/// assert!((root - 1.521_379_706_804_568).abs() < 1e-10);
/// ```
pub fn solve<F>(
    f: F,
    x0: f64,
    x1: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
    max_iterations: u32,
) -> RootFindingResult<f64>
where
    F: Fn(f64) -> f64,
{
    let config = SolverConfig::new(abs_tolerance, rel_tolerance, max_iterations);
    chandrupatla(f, x0, x1, &config).map(|result| result.root)
}

fn exact(root: f64, residual: f64, other: f64) -> SolverResult {
    SolverResult {
        root,
        iterations: 0,
        residual,
        lower: root.min(other),
        upper: root.max(other),
    }
}
