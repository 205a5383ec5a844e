use crate::probability::{Probability, CERTAIN, IMPOSSIBLE};
use crate::{ProbError, Result};

// Closed form mass functions of the common named distributions. Each
// constructor checks its parameters once and hands back the mass function.
//
// Factorials and powers are combined as logarithms so large trial counts and
// rates stay finite.

fn ln_factorial(n: u64) -> f64 {
    (2..=n).map(|i| (i as f64).ln()).sum()
}

fn ln_choose(n: u64, k: u64) -> f64 {
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

// x ln(y), taking 0 ln(0) as 0
fn x_ln_y(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x * y.ln()
    }
}

fn from_ln(ln_p: f64) -> Probability {
    Probability::new(ln_p.exp().min(CERTAIN.value()))
}

fn check(p: Probability) -> Result<Probability> {
    Probability::checked(p.value())
}

// { 1 with probability p, 0 with probability 1 - p }
pub fn bernoulli(p: Probability) -> Result<impl Fn(u64) -> Probability> {
    let p = check(p)?;
    Ok(move |k: u64| if k == 1 { p } else { p.complement() })
}

/// Number of successes in `n` independent trials, each succeeding with
/// probability `p`: `(n choose k) p^k (1-p)^(n-k)`.
pub fn binomial(n: u64, p: Probability) -> Result<impl Fn(u64) -> Probability> {
    let p = check(p)?;
    Ok(move |k: u64| {
        // more successes than trials
        if k > n {
            return IMPOSSIBLE;
        }
        from_ln(ln_choose(n, k) + x_ln_y(k as f64, p.value()) + x_ln_y((n - k) as f64, p.complement().value()))
    })
}

/// Probability of a partition of `sum(partition)` draws into categories, where
/// a draw lands in category `i` with probability `probabilities[i]`.
pub fn multinomial(probabilities: Vec<Probability>) -> Result<impl Fn(&[u64]) -> Result<Probability>> {
    let probabilities = probabilities.into_iter().map(check).collect::<Result<Vec<_>>>()?;
    Ok(move |partition: &[u64]| {
        if partition.len() != probabilities.len() {
            return Err(ProbError::InvalidArgument(format!(
                "partition has {} categories, expected {}", partition.len(), probabilities.len())));
        }
        let total: u64 = partition.iter().sum();
        if total == 0 {
            return Err(ProbError::InvalidArgument(String::from("partition sum can't be zero")));
        }

        let ln_coefficient = ln_factorial(total) - partition.iter().map(|k| ln_factorial(*k)).sum::<f64>();
        let ln_scale: f64 = probabilities.iter()
            .zip(partition.iter())
            .map(|(p, k)| x_ln_y(*k as f64, p.value()))
            .sum();
        Ok(from_ln(ln_coefficient + ln_scale))
    })
}

// uniform on the discrete range [1, 2, ..., n]
pub fn uniform(n: u64) -> Result<impl Fn(u64) -> Probability> {
    if n == 0 {
        return Err(ProbError::DegenerateInput);
    }
    let p = Probability::new(CERTAIN.value() / n as f64);
    Ok(move |k: u64| if (1..=n).contains(&k) { p } else { IMPOSSIBLE })
}

/// Probability that the first success, each trial succeeding with probability
/// `p`, happens on trial `k`.
pub fn geometric(p: Probability) -> Result<impl Fn(u64) -> Probability> {
    let p = check(p)?;
    Ok(move |k: u64| {
        if k == 0 {
            IMPOSSIBLE
        } else {
            Probability::new(p.complement().value().powf((k - 1) as f64) * p.value())
        }
    })
}

/// Probability of observing `k` occurrences of a process with rate `mu` per interval.
pub fn poisson(mu: f64) -> Result<impl Fn(u64) -> Probability> {
    if !mu.is_finite() || mu < 0.0 {
        return Err(ProbError::InvalidArgument(format!("poisson rate must be finite and non-negative, got {}", mu)));
    }
    Ok(move |k: u64| from_ln(-mu + x_ln_y(k as f64, mu) - ln_factorial(k)))
}
