use std::hash::Hash;

use outcome_space::{with_elements, OutcomeSpace};
use serde::{Deserialize, Serialize};

use crate::distribution::{DiscreteDistribution, Distribution};
use crate::probability::Probability;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionDescription<T> {
    domain: Vec<T>,
    support: Vec<(T, Probability)>,
}

impl<T: Ord + Hash + Clone> DistributionDescription<T> {
    pub fn new(domain: Vec<T>, support: Vec<(T, Probability)>) -> Self {
        Self {
            domain,
            support,
        }
    }

    pub fn from_distribution<S>(d: &DiscreteDistribution<S>) -> Self
    where
        S: OutcomeSpace<Elem = T>,
    {
        let mut domain = d.domain().elements();
        domain.sort();
        let mut support: Vec<(T, Probability)> = d.outcomes()
            .iter()
            .map(|o| (o.clone(), d.mass(o)))
            .collect();
        support.sort_by(|a, b| a.0.cmp(&b.0));
        Self {
            domain,
            support,
        }
    }

    // every assignment goes back through add_outcome, so a hand written
    // description is held to the same invariants as code
    pub fn to_distribution<S>(&self) -> Result<DiscreteDistribution<S>>
    where
        S: OutcomeSpace<Elem = T>,
    {
        let domain: S = with_elements(self.domain.iter().cloned());
        let mut d = DiscreteDistribution::new(domain);
        for (o, p) in self.support.iter() {
            d.add_outcome(o.clone(), *p)?;
        }
        Ok(d)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use outcome_space::with_elements;

    use crate::properties::fully_supported;
    use crate::ProbError;

    use super::*;

    #[test]
    fn json_test() {
        let s: HashSet<String> = with_elements(["win", "lose", "draw"].map(String::from));
        let mut d = DiscreteDistribution::new(s);
        d.add_outcome(String::from("win"), Probability::new(0.45)).unwrap();
        d.add_outcome(String::from("lose"), Probability::new(0.55)).unwrap();

        let description = DistributionDescription::from_distribution(&d);
        let expected = DistributionDescription::new(
            vec!(String::from("draw"), String::from("lose"), String::from("win")),
            vec!((String::from("lose"), Probability::new(0.55)), (String::from("win"), Probability::new(0.45))));
        assert_eq!(expected, description);

        let json = serde_json::to_string_pretty(&description).unwrap();
        //println!("Distribution json = \n{}", json);
        let copy: DistributionDescription<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(description, copy);

        let rebuilt: DiscreteDistribution<HashSet<String>> = copy.to_distribution().unwrap();
        assert!(rebuilt.domain().equivalent(d.domain()));
        assert!(fully_supported(&rebuilt));
        for o in ["win", "lose", "draw"].map(String::from) {
            assert_eq!(d.probability_of(&o), rebuilt.probability_of(&o));
        }
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"domain":[1,2,3],"support":[[1,0.5],[3,0.5]]}"#;
        let description: DistributionDescription<isize> = serde_json::from_str(json).unwrap();
        assert_eq!(DistributionDescription::new(vec!(1, 2, 3), vec!((1, Probability::new(0.5)), (3, Probability::new(0.5)))), description);
        let d: DiscreteDistribution<BTreeSet<isize>> = description.to_distribution().unwrap();
        assert_eq!(vec!(1, 3), d.support());
        assert_eq!(json, serde_json::to_string(&DistributionDescription::from_distribution(&d)).unwrap());
    }

    #[test]
    fn test_invalid_description() {
        let over = DistributionDescription::new(vec!(1, 2), vec!((1, Probability::new(0.8)), (2, Probability::new(0.8))));
        let err = over.to_distribution::<BTreeSet<isize>>().unwrap_err();
        assert!(matches!(err, ProbError::OverSupported { .. }));

        let outside = DistributionDescription::new(vec!(1, 2), vec!((5, Probability::new(1.0))));
        assert_eq!(ProbError::OutcomeNotInDomain, outside.to_distribution::<BTreeSet<isize>>().unwrap_err());

        let negative: DistributionDescription<isize> = serde_json::from_str(r#"{"domain":[1],"support":[[1,-1.0]]}"#).unwrap();
        assert_eq!(ProbError::InvalidProbability(-1.0), negative.to_distribution::<BTreeSet<isize>>().unwrap_err());
    }
}
