use outcome_space::OutcomeSpace;
use tracing::debug;

use crate::distribution::{DiscreteDistribution, Distribution};
use crate::probability::{Probability, CERTAIN};
use crate::properties::fully_supported;
use crate::{ProbError, Result};

/// Mixes `p` and `q` into a new distribution over their shared domain:
/// each outcome `o` gets `alpha * P_p(o) + (1 - alpha) * P_q(o)`.
///
/// `alpha` is expected to lie in [0, 1] and is not checked here; a value outside
/// that range surfaces as whatever `add_outcome` rejects.
pub fn compose<S: OutcomeSpace>(
    p: &DiscreteDistribution<S>,
    q: &DiscreteDistribution<S>,
    alpha: Probability,
) -> Result<DiscreteDistribution<S>> {
    if !fully_supported(p) {
        debug!("first distribution is not fully supported");
        return Err(ProbError::NotFullySupported);
    }
    if !fully_supported(q) {
        debug!("second distribution is not fully supported");
        return Err(ProbError::NotFullySupported);
    }
    if !p.domain().equivalent(q.domain()) {
        debug!("domains of both distributions must be equivalent");
        return Err(ProbError::DomainMismatch);
    }

    let domain = p.domain_handle();
    let mut n = DiscreteDistribution::with_domain(domain.clone());
    let beta = CERTAIN - alpha;
    for o in domain.iter() {
        let cp = alpha * p.probability_of(o)? + beta * q.probability_of(o)?;
        // shares within tolerance of zero stay out of the support
        if cp.is_impossible() {
            continue;
        }
        n.add_outcome(o.clone(), cp)?;
    }
    Ok(n)
}
