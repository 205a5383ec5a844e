use outcome_space::OutcomeSpace;

use crate::distribution::Distribution;
use crate::probability::Probability;

// Portion of the probability mass that has been assigned. A distribution
// whose support is CERTAIN is fully supported, nothing more can be added.
pub fn support<D: Distribution>(d: &D) -> Probability {
    d.outcomes().iter().map(|o| d.mass(o)).sum()
}

pub fn fully_supported<D: Distribution>(d: &D) -> bool {
    support(d).is_certain()
}

// number of outcomes carrying mass
pub fn cardinality<D: Distribution>(d: &D) -> usize {
    d.outcomes().cardinality()
}

// fully supported with a single possible outcome
pub fn degenerate<D: Distribution>(d: &D) -> bool {
    cardinality(d) == 1 && fully_supported(d)
}
