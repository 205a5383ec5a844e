use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

use num::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::{ProbError, Result};

// acceptable floating point error for every mass comparison
pub const EPSILON: f64 = 0.00001;

pub const IMPOSSIBLE: Probability = Probability(0.0);
pub const CERTAIN: Probability = Probability(1.0);

pub fn equiv(f1: f64, f2: f64) -> bool {
    (f1 - f2).abs() < EPSILON
}

/// A probability is an element of [0, 1].
///
/// Arithmetic on `Probability` is unchecked, sums of valid probabilities can leave
/// the interval. Use [`Probability::valid`] or [`Probability::checked`] at the
/// boundaries where validity matters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    pub const fn new(p: f64) -> Self {
        Self(p)
    }

    pub fn checked(p: f64) -> Result<Self> {
        let prob = Self(p);
        if prob.valid() {
            Ok(prob)
        } else {
            Err(ProbError::InvalidProbability(p))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    // NaN is never valid
    pub fn valid(self) -> bool {
        0.0 <= self.0 && self.0 <= 1.0
    }

    pub fn approx_eq(self, other: Probability) -> bool {
        equiv(self.0, other.0)
    }

    pub fn is_impossible(self) -> bool {
        self.approx_eq(IMPOSSIBLE)
    }

    pub fn is_certain(self) -> bool {
        self.approx_eq(CERTAIN)
    }

    pub fn complement(self) -> Self {
        CERTAIN - self
    }
}

impl Add for Probability {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Probability {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Probability {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Zero for Probability {
    fn zero() -> Self {
        IMPOSSIBLE
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for Probability {
    fn one() -> Self {
        CERTAIN
    }
}

impl Sum for Probability {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Probability> for Probability {
    fn sum<I: Iterator<Item = &'a Probability>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Probability> for f64 {
    fn from(value: Probability) -> Self {
        value.0
    }
}

impl Display for Probability {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
