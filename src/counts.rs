//! Exact counts of combinatorial objects.
//!
//! Reference values for the generators: a full pass of
//! [`PermutationsGen`][crate::permgen::PermutationsGen] has `n!` states,
//! [`CombinationsGen`][crate::combgen::CombinationsGen] has `C(n, k)` and
//! [`BracesGen`][crate::bracegen::BracesGen] has `Catalan(n)`. Computed in
//! `BigUint` so the counts stay exact for sizes far beyond what the
//! generators are ever run for.

use num_bigint::BigUint;

/// `n!`
pub fn factorial(n: u64) -> BigUint {
    let mut result = BigUint::from(1u32);
    for i in 2..=n {
        result *= i;
    }
    result
}

/// `C(n, k)`, zero when `k > n`.
pub fn binomial(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    let k = k.min(n - k);
    let mut result = BigUint::from(1u32);
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// The n-th Catalan number, `C(2n, n) / (n + 1)`.
pub fn catalan(n: u64) -> BigUint {
    binomial(2 * n, n) / (n + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), BigUint::from(1u32));
        assert_eq!(factorial(1), BigUint::from(1u32));
        assert_eq!(factorial(4), BigUint::from(24u32));
        assert_eq!(factorial(10), BigUint::from(3628800u32));
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), BigUint::from(10u32));
        assert_eq!(binomial(6, 3), BigUint::from(20u32));
        assert_eq!(binomial(6, 0), BigUint::from(1u32));
        assert_eq!(binomial(6, 6), BigUint::from(1u32));
        assert_eq!(binomial(3, 4), BigUint::ZERO);
        // symmetry
        assert_eq!(binomial(20, 7), binomial(20, 13));
    }

    #[test]
    fn test_catalan() {
        let expected = [1u32, 1, 2, 5, 14, 42, 132];
        for (n, &c) in expected.iter().enumerate() {
            assert_eq!(catalan(n as u64), BigUint::from(c));
        }
    }
}
