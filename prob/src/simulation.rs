use outcome_space::OutcomeSpace;
use rand::Rng;
use tracing::{debug, trace};

use crate::distribution::{Distribution, Outcome};
use crate::probability::{Probability, IMPOSSIBLE};
use crate::properties::fully_supported;
use crate::{ProbError, Result};

/// Draws one outcome of `d` by inverse-CDF sampling.
///
/// Outcomes are walked in the iteration order of the outcome space, so a
/// `BTreeSet` backed distribution paired with a seeded `rng` is reproducible.
///
/// ```
/// use std::collections::BTreeSet;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use outcome_space::with_elements;
/// use prob::DiscreteDistribution;
/// use prob::simulation::simulate;
///
/// let s: BTreeSet<isize> = with_elements([1, 2, 3]);
/// let d = DiscreteDistribution::new_uniform(s).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let o = simulate(&d, &mut rng).unwrap();
/// assert!((1..=3).contains(&o));
/// ```
pub fn simulate<D, R>(d: &D, rng: &mut R) -> Result<Outcome<D::Space>>
where
    D: Distribution,
    R: Rng + ?Sized,
{
    if !fully_supported(d) {
        debug!("discrete distribution not fully supported");
        return Err(ProbError::NotFullySupported);
    }

    let f: f64 = rng.gen();
    trace!(threshold = f, "simulating");
    let mut p: Probability = IMPOSSIBLE;
    let mut last = None;
    for o in d.outcomes().iter() {
        p = p + d.mass(o);
        last = Some(o);
        if f < p.value() {
            return Ok(o.clone());
        }
    }

    // the running mass fell short of the threshold through rounding
    trace!(threshold = f, mass = p.value(), "falling back to last outcome");
    last.cloned().ok_or(ProbError::NotFullySupported)
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, HashSet};

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use outcome_space::with_elements;

    use crate::distribution::DiscreteDistribution;
    use crate::probability::CERTAIN;

    use super::*;

    fn count_draws<D: Distribution>(d: &D, n: usize, seed: u64) -> BTreeMap<Outcome<D::Space>, usize>
    where
        Outcome<D::Space>: Ord,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts = BTreeMap::new();
        for _ in 0..n {
            let o = simulate(d, &mut rng).unwrap();
            *counts.entry(o).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_uniform_frequencies() {
        let s: BTreeSet<isize> = with_elements([1, 2, 3]);
        let d = DiscreteDistribution::new_uniform(s).unwrap();
        let n = 30_000;
        let counts = count_draws(&d, n, 42);
        assert_eq!(3, counts.len());
        for o in 1..=3 {
            let freq = counts[&o] as f64 / n as f64;
            assert!((freq - 1.0 / 3.0).abs() < 0.02, "frequency of {} was {}", o, freq);
        }
    }

    #[test]
    fn test_skewed_frequencies() {
        let s: HashSet<&str> = with_elements(["rain", "sun", "snow"]);
        let mut d = DiscreteDistribution::new(s);
        d.add_outcome("rain", Probability::new(0.2)).unwrap();
        d.add_outcome("sun", Probability::new(0.8)).unwrap();
        let n = 20_000;
        let counts = count_draws(&d, n, 7);
        // never drawn without mass
        assert!(!counts.contains_key("snow"));
        let sun = counts["sun"] as f64 / n as f64;
        assert!((sun - 0.8).abs() < 0.02, "frequency of sun was {}", sun);
    }

    #[test]
    fn test_degenerate() {
        let s: BTreeSet<isize> = with_elements(1..=10);
        let mut d = DiscreteDistribution::new(s);
        d.add_outcome(7, CERTAIN).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(Ok(7), simulate(&d, &mut rng));
        }
    }

    #[test]
    fn test_reproducible() {
        let s: BTreeSet<isize> = with_elements(1..=6);
        let d = DiscreteDistribution::new_uniform(s).unwrap();
        let mut rng1 = StdRng::seed_from_u64(1234);
        let mut rng2 = StdRng::seed_from_u64(1234);
        for _ in 0..50 {
            assert_eq!(simulate(&d, &mut rng1), simulate(&d, &mut rng2));
        }
    }

    #[test]
    fn test_rounding_fallback() {
        // mass within tolerance below one can leave the walk short of the threshold
        let s: BTreeSet<isize> = with_elements([1, 2]);
        let mut d = DiscreteDistribution::new(s);
        d.add_outcome(1, Probability::new(0.5)).unwrap();
        d.add_outcome(2, Probability::new(0.499999)).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            let o = simulate(&d, &mut rng).unwrap();
            assert!(o == 1 || o == 2);
        }
    }

    #[test]
    fn test_not_fully_supported() {
        let s: BTreeSet<isize> = with_elements([1, 2]);
        let mut d = DiscreteDistribution::new(s);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Err(ProbError::NotFullySupported), simulate(&d, &mut rng));
        d.add_outcome(1, Probability::new(0.5)).unwrap();
        assert_eq!(Err(ProbError::NotFullySupported), simulate(&d, &mut rng));
    }

    #[test]
    fn test_dyn_rng() {
        let s: BTreeSet<isize> = with_elements([1, 2]);
        let d = DiscreteDistribution::new_uniform(s).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        assert!(simulate(&d, dyn_rng).is_ok());
    }
}
