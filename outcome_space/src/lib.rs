use std::collections::{btree_set, hash_set, BTreeSet, HashSet};
use std::hash::Hash;

use itertools::Itertools;

// The set capabilities a distribution needs from its domain.
// HashSet iterates in an arbitrary order, BTreeSet in ascending order.
pub trait OutcomeSpace: Default + Clone {
    type Elem: Eq + Hash + Clone;
    type Iter<'a>: Iterator<Item = &'a Self::Elem>
    where
        Self: 'a;

    fn add(&mut self, e: Self::Elem) -> bool;
    fn contains(&self, e: &Self::Elem) -> bool;
    fn iter(&self) -> Self::Iter<'_>;
    fn cardinality(&self) -> usize;
    fn union(&self, other: &Self) -> Self;

    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.cardinality() == other.cardinality() && self.iter().all(|e| other.contains(e))
    }

    fn elements(&self) -> Vec<Self::Elem> {
        self.iter().cloned().collect()
    }
}

pub fn with_elements<S, I>(items: I) -> S
where
    S: OutcomeSpace,
    I: IntoIterator<Item = S::Elem>,
{
    let mut space = S::default();
    for e in items {
        space.add(e);
    }
    space
}

impl<T: Eq + Hash + Clone> OutcomeSpace for HashSet<T> {
    type Elem = T;
    type Iter<'a> = hash_set::Iter<'a, T> where Self: 'a;

    fn add(&mut self, e: T) -> bool {
        self.insert(e)
    }

    fn contains(&self, e: &T) -> bool {
        HashSet::contains(self, e)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }

    fn cardinality(&self) -> usize {
        self.len()
    }

    fn union(&self, other: &Self) -> Self {
        HashSet::iter(self)
            .chain(HashSet::iter(other))
            .unique()
            .cloned()
            .collect()
    }
}

impl<T: Ord + Hash + Clone> OutcomeSpace for BTreeSet<T> {
    type Elem = T;
    type Iter<'a> = btree_set::Iter<'a, T> where Self: 'a;

    fn add(&mut self, e: T) -> bool {
        self.insert(e)
    }

    fn contains(&self, e: &T) -> bool {
        BTreeSet::contains(self, e)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }

    fn cardinality(&self) -> usize {
        self.len()
    }

    // both sides are already sorted, so a merge keeps the result sorted
    fn union(&self, other: &Self) -> Self {
        BTreeSet::iter(self)
            .merge(BTreeSet::iter(other))
            .dedup()
            .cloned()
            .collect()
    }
}
