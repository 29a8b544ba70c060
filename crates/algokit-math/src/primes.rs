//! Prime numbers: factorization, sieving and lazy generators.

use algokit_core::{Error, Result};

// ============================================================================
// Factorization
// ============================================================================

/// Iterator over the prime factors of a number, smallest first.
///
/// Created by [`prime_factors`].
#[derive(Clone, Debug)]
pub struct PrimeFactors {
    remaining: u64,
    divisor: u64,
}

impl Iterator for PrimeFactors {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 1 {
            return None;
        }
        // `divisor <= remaining / divisor` is `divisor² <= remaining`
        // without overflow.
        while self.divisor <= self.remaining / self.divisor {
            if self.remaining % self.divisor == 0 {
                self.remaining /= self.divisor;
                return Some(self.divisor);
            }
            self.divisor += if self.divisor == 2 { 1 } else { 2 };
        }
        // What is left has no divisor up to its square root.
        let last = self.remaining;
        self.remaining = 1;
        Some(last)
    }
}

/// The prime factors of `n` in non-decreasing order, with multiplicity.
///
/// Returns `InvalidInput` for `n < 2`, which has no prime factorization.
///
/// # Examples
///
/// ```
/// use algokit_math::prime_factors;
///
/// let factors: Vec<u64> = prime_factors(360).unwrap().collect();
/// assert_eq!(factors, vec![2, 2, 2, 3, 3, 5]);
/// assert!(prime_factors(1).is_err());
/// ```
pub fn prime_factors(n: u64) -> Result<PrimeFactors> {
    if n < 2 {
        return Err(Error::invalid_input(format!(
            "{n} has no prime factorization"
        )));
    }
    Ok(PrimeFactors {
        remaining: n,
        divisor: 2,
    })
}

// ============================================================================
// Primality and generation
// ============================================================================

/// Whether `n` is prime, by trial division with odd divisors.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Largest bound [`prime_sieve`] will allocate a table for.
pub const MAX_SIEVE_BOUND: usize = 1 << 30;

/// All primes `<= n`, by the Sieve of Eratosthenes.
///
/// Returns `InvalidInput` when `n` exceeds [`MAX_SIEVE_BOUND`]; use
/// [`primes_trial_division`] to generate primes past it lazily.
///
/// ```
/// use algokit_math::prime_sieve;
///
/// assert_eq!(prime_sieve(30).unwrap(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// assert!(prime_sieve(1).unwrap().is_empty());
/// ```
pub fn prime_sieve(n: usize) -> Result<Vec<usize>> {
    if n > MAX_SIEVE_BOUND {
        return Err(Error::invalid_input(format!(
            "sieve bound {n} exceeds the limit {MAX_SIEVE_BOUND}"
        )));
    }
    if n < 2 {
        return Ok(Vec::new());
    }
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i <= n / i {
        if is_prime[i] {
            for multiple in (i * i..=n).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }

    let primes: Vec<usize> = is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| p.then_some(i))
        .collect();
    log::trace!("sieve up to {} found {} primes", n, primes.len());
    Ok(primes)
}

/// Primes `<= n`, testing each candidate against every smaller number.
///
/// Quadratic; kept as the obviously-correct reference for the faster
/// generators.
pub fn primes_naive(n: u64) -> impl Iterator<Item = u64> {
    (2..=n).filter(|&i| (2..i).all(|j| i % j != 0))
}

/// Primes `<= n`, testing only odd candidates against odd divisors up to
/// their square root.
pub fn primes_trial_division(n: u64) -> impl Iterator<Item = u64> {
    let two = (n >= 2).then_some(2);
    let odds = (3..=n).step_by(2).filter(|&i| {
        let mut j = 3;
        while j <= i / j {
            if i % j == 0 {
                return false;
            }
            j += 2;
        }
        true
    });
    two.into_iter().chain(odds)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_factors_composites() {
        let cases: [(u64, &[u64]); 5] = [
            (360, &[2, 2, 2, 3, 3, 5]),
            (2 * 3 * 5 * 7, &[2, 3, 5, 7]),
            (49, &[7, 7]),
            (1024, &[2; 10]),
            (600_851_475_143, &[71, 839, 1471, 6857]),
        ];
        for (n, expected) in cases {
            let factors: Vec<u64> = prime_factors(n).unwrap().collect();
            assert_eq!(factors, expected, "factors of {n}");
        }
    }

    #[test]
    fn test_prime_factors_of_a_prime() {
        assert_eq!(prime_factors(97).unwrap().collect::<Vec<_>>(), vec![97]);
        assert_eq!(prime_factors(2).unwrap().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_prime_factors_large_prime_and_semiprime() {
        let p = 1_000_000_007;
        assert_eq!(prime_factors(p).unwrap().collect::<Vec<_>>(), vec![p]);
        let (a, b) = (999_983, 1_000_003);
        assert_eq!(prime_factors(a * b).unwrap().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_prime_factors_rejects_small() {
        assert!(prime_factors(0).unwrap_err().is_input_error());
        assert!(prime_factors(1).unwrap_err().is_input_error());
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(!is_prime(561));
        assert!(is_prime(7919));
    }

    #[test]
    fn test_prime_sieve_edges() {
        assert!(prime_sieve(0).unwrap().is_empty());
        assert_eq!(prime_sieve(2).unwrap(), vec![2]);
        assert_eq!(prime_sieve(3).unwrap(), vec![2, 3]);
        assert_eq!(prime_sieve(4).unwrap(), vec![2, 3]);
        assert_eq!(prime_sieve(100).unwrap().len(), 25);
    }

    #[test]
    fn test_prime_sieve_rejects_huge_bounds() {
        for n in [usize::MAX, MAX_SIEVE_BOUND + 1] {
            let err = prime_sieve(n).unwrap_err();
            assert!(err.is_input_error(), "n = {n}");
        }
    }

    #[test]
    fn test_generators_agree_with_sieve() {
        let sieve: Vec<u64> = prime_sieve(500).unwrap().into_iter().map(|p| p as u64).collect();
        assert_eq!(primes_naive(500).collect::<Vec<_>>(), sieve);
        assert_eq!(primes_trial_division(500).collect::<Vec<_>>(), sieve);
    }

    #[test]
    fn test_generators_small_bounds() {
        assert_eq!(primes_naive(1).count(), 0);
        assert_eq!(primes_trial_division(1).count(), 0);
        assert_eq!(primes_trial_division(2).collect::<Vec<_>>(), vec![2]);
        assert_eq!(primes_trial_division(9).collect::<Vec<_>>(), vec![2, 3, 5, 7]);
    }
}
