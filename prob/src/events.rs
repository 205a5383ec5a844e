use outcome_space::OutcomeSpace;

use crate::distribution::Distribution;
use crate::probability::Probability;
use crate::Result;

// An event is a subset of the outcome space. Members outside the support add
// nothing, members outside the domain are an error.
pub fn probability_of<D: Distribution>(d: &D, event: &D::Space) -> Result<Probability> {
    event.iter().map(|o| d.probability_of(o)).sum()
}

/// Tests `P(A ∪ B) = P(A)P(B)` under `d`.
///
/// This is the union form, not the `P(A ∩ B)` definition of independence,
/// so results can differ from the textbook notion.
pub fn independent_events<D: Distribution>(d: &D, a: &D::Space, b: &D::Space) -> Result<bool> {
    let joint = probability_of(d, &a.union(b))?;
    let p_a = probability_of(d, a)?;
    let p_b = probability_of(d, b)?;
    Ok(joint.approx_eq(p_a * p_b))
}
