//! Per-iteration reporting.

/// How a sample point was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Midpoint of the current bracket.
    Bisection,
    /// Zero of the inverse quadratic through the three tracked points,
    /// clamped away from the bracket ends.
    InverseQuadratic,
}

/// State of the search after one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// One-based iteration number.
    pub iteration: u32,
    /// Point sampled in this iteration.
    pub x: f64,
    /// Function value at `x`.
    pub fx: f64,
    /// How `x` was chosen.
    pub method: Method,
    /// Lower end of the bracket after the update.
    pub lower: f64,
    /// Upper end of the bracket after the update.
    pub upper: f64,
    /// Bracket end with the smaller absolute function value.
    pub best: f64,
    /// Function value at `best`.
    pub f_best: f64,
    /// Working tolerance, `max(rel_tolerance * |best|, abs_tolerance)`.
    pub tolerance: f64,
}

impl Step {
    /// Returns the bracket as an ordered pair.
    pub fn bracket(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Returns the bracket width.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Receives a [`Step`] after every iteration.
///
/// Closures taking `&Step` implement `Observer`, and `()` is a no-op observer.
pub trait Observer {
    /// Observes one completed iteration.
    fn observe(&mut self, step: &Step);
}

impl<F> Observer for F
where
    F: FnMut(&Step),
{
    fn observe(&mut self, step: &Step) {
        self(step);
    }
}

impl Observer for () {
    fn observe(&mut self, _step: &Step) {}
}
