use num::{BigUint, One};

use crate::{ProbError, Result};

// n!
pub fn factorial(n: &BigUint) -> BigUint {
    num::range_inclusive(BigUint::one(), n.clone()).product()
}

// (n choose k)
pub fn combination(n: &BigUint, k: &BigUint) -> Result<BigUint> {
    if k > n {
        return Err(ProbError::InvalidArgument(format!("cannot choose {} from {}", k, n)));
    }
    let delta = n - k;
    Ok(factorial(n) / (factorial(k) * factorial(&delta)))
}

pub fn choose(n: &BigUint, k: &BigUint) -> Result<BigUint> {
    combination(n, k)
}
