use outcome_space::OutcomeSpace;

use crate::distribution::{Distribution, Outcome};
use crate::probability::equiv;

// A random variable is neither random nor variable: it is a fixed real valued
// function of an outcome, the outcome brings the stochasticity.

pub fn expectation<D, X>(d: &D, x: X) -> f64
where
    D: Distribution,
    X: Fn(&Outcome<D::Space>) -> f64,
{
    d.outcomes().iter().map(|o| x(o) * d.mass(o).value()).sum()
}

/// The nth moment of `x`, E[X^n].
pub fn moment<D, X>(d: &D, x: X, n: i32) -> f64
where
    D: Distribution,
    X: Fn(&Outcome<D::Space>) -> f64,
{
    expectation(d, |o| x(o).powi(n))
}

/// Var(X) = E[X^2] - E[X]^2
///
/// Rounding can leave a result a hair below zero when the true variance is zero,
/// callers that need a non-negative value should clamp.
pub fn variance<D, X>(d: &D, x: X) -> f64
where
    D: Distribution,
    X: Fn(&Outcome<D::Space>) -> f64,
{
    moment(d, &x, 2) - moment(d, &x, 1).powi(2)
}

/// Cov(X, Y) = E[XY] - E[X]E[Y]
pub fn covariance<D, X, Y>(d: &D, x: X, y: Y) -> f64
where
    D: Distribution,
    X: Fn(&Outcome<D::Space>) -> f64,
    Y: Fn(&Outcome<D::Space>) -> f64,
{
    expectation(d, |o| x(o) * y(o)) - expectation(d, &x) * expectation(d, &y)
}

pub fn independent_variables<D, X, Y>(d: &D, x: X, y: Y) -> bool
where
    D: Distribution,
    X: Fn(&Outcome<D::Space>) -> f64,
    Y: Fn(&Outcome<D::Space>) -> f64,
{
    equiv(covariance(d, x, y), 0.0)
}
