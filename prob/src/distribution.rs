use std::collections::HashMap;
use std::sync::Arc;

use outcome_space::OutcomeSpace;
use tracing::{debug, trace};

use crate::probability::{Probability, CERTAIN, EPSILON, IMPOSSIBLE};
use crate::{ProbError, Result};

pub type Outcome<S> = <S as OutcomeSpace>::Elem;

/// The read side of a probability distribution.
///
/// The domain is the outcome space, the outcomes are the members of the domain
/// carrying non-zero mass.
pub trait Distribution {
    type Space: OutcomeSpace;

    fn domain(&self) -> &Self::Space;
    fn outcomes(&self) -> &Self::Space;

    // recorded mass of an outcome, IMPOSSIBLE for anything without one
    fn mass(&self, o: &Outcome<Self::Space>) -> Probability;

    /// Probability of a single outcome. Domain members without an assigned
    /// probability are `IMPOSSIBLE`, anything outside the domain is an error.
    fn probability_of(&self, o: &Outcome<Self::Space>) -> Result<Probability> {
        if self.outcomes().contains(o) {
            Ok(self.mass(o))
        } else if self.domain().contains(o) {
            Ok(IMPOSSIBLE)
        } else {
            Err(ProbError::OutcomeNotInDomain)
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiscreteDistribution<S: OutcomeSpace> {
    domain: Arc<S>,
    outcomes: S,
    support: HashMap<S::Elem, Probability>,
    total: Probability,
}

impl<S: OutcomeSpace> DiscreteDistribution<S> {
    pub fn new(domain: S) -> Self {
        Self::with_domain(Arc::new(domain))
    }

    /// Starts an empty distribution over a domain shared with other distributions.
    pub fn with_domain(domain: Arc<S>) -> Self {
        Self {
            domain,
            outcomes: S::default(),
            support: HashMap::new(),
            total: IMPOSSIBLE,
        }
    }

    pub fn new_uniform(domain: S) -> Result<Self> {
        Self::uniform_with_domain(Arc::new(domain))
    }

    pub fn uniform_with_domain(domain: Arc<S>) -> Result<Self> {
        if domain.is_empty() {
            return Err(ProbError::DegenerateInput);
        }
        let individual = Probability::new(CERTAIN.value() / domain.cardinality() as f64);
        let mut d = Self::with_domain(Arc::clone(&domain));
        for o in domain.iter() {
            d.add_outcome(o.clone(), individual)?;
        }
        Ok(d)
    }

    pub fn domain_handle(&self) -> Arc<S> {
        Arc::clone(&self.domain)
    }

    pub fn support(&self) -> Vec<S::Elem> {
        self.outcomes.elements()
    }

    pub fn add_outcome(&mut self, o: S::Elem, p: Probability) -> Result<()> {
        if self.total.is_certain() {
            return self.reject(ProbError::OverSupported {
                current: self.total.value(),
                attempted: p.value(),
            });
        }
        if (self.total + p).value() >= CERTAIN.value() + EPSILON {
            return self.reject(ProbError::OverSupported {
                current: self.total.value(),
                attempted: p.value(),
            });
        }
        if !p.valid() || p.is_impossible() {
            return self.reject(ProbError::InvalidProbability(p.value()));
        }
        if !self.domain.contains(&o) {
            return self.reject(ProbError::OutcomeNotInDomain);
        }
        if self.support.contains_key(&o) {
            return self.reject(ProbError::DuplicateOutcome);
        }

        self.outcomes.add(o.clone());
        self.support.insert(o, p);
        self.total = self.total + p;
        trace!(probability = p.value(), support = self.total.value(), "outcome added");
        Ok(())
    }

    fn reject(&self, err: ProbError) -> Result<()> {
        debug!(support = self.total.value(), error = %err, "rejected outcome");
        Err(err)
    }
}

impl<S: OutcomeSpace> Distribution for DiscreteDistribution<S> {
    type Space = S;

    fn domain(&self) -> &S {
        &self.domain
    }

    fn outcomes(&self) -> &S {
        &self.outcomes
    }

    fn mass(&self, o: &S::Elem) -> Probability {
        match self.support.get(o) {
            Some(p) => *p,
            None => IMPOSSIBLE,
        }
    }
}
