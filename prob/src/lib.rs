use thiserror::Error;

pub mod probability;
pub mod distribution;
pub mod properties;
pub mod statistics;
pub mod events;
pub mod composition;
pub mod simulation;
pub mod combinatorics;
pub mod formulas;
pub mod serialization;

pub use outcome_space::OutcomeSpace;
pub use distribution::{DiscreteDistribution, Distribution, Outcome};
pub use probability::{Probability, CERTAIN, EPSILON, IMPOSSIBLE};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbError {
    #[error("invalid probability {0}: must lie in [0, 1] and be non-zero")]
    InvalidProbability(f64),
    #[error("over-supported: current support {current} cannot take {attempted} more")]
    OverSupported { current: f64, attempted: f64 },
    #[error("outcome not in domain")]
    OutcomeNotInDomain,
    #[error("distribution is not fully supported")]
    NotFullySupported,
    #[error("domains of both distributions must be equivalent")]
    DomainMismatch,
    #[error("cannot build a distribution over an empty domain")]
    DegenerateInput,
    #[error("outcome already has an assigned probability")]
    DuplicateOutcome,
    #[error("{0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ProbError>;
