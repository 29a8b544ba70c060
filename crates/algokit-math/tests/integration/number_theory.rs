//! Routines combined the way number theory exercises use them.

use algokit_math::{Fibonacci, extended_gcd, gcd, mod_pow, prime_factors, prime_sieve};

#[test]
fn test_modular_inverse_via_extended_gcd() {
    let (a, m) = (17i64, 3120i64);
    let (g, x, _) = extended_gcd(a, m).unwrap();
    assert_eq!(g, 1);
    let inverse = x.rem_euclid(m);
    assert_eq!(inverse, 2753);
    assert_eq!((a * inverse) % m, 1);
}

#[test]
fn test_fermat_little_theorem_over_sieved_primes() {
    for p in prime_sieve(200).unwrap().into_iter().map(|p| p as u64) {
        for a in [2u64, 3, 10, 123_456] {
            if a % p != 0 {
                assert_eq!(mod_pow(a, p - 1, p).unwrap(), 1, "a={a}, p={p}");
            }
        }
    }
}

#[test]
fn test_consecutive_fibonacci_numbers_are_coprime() {
    let terms: Vec<u128> = Fibonacci::new().take(90).collect();
    for pair in terms.windows(2) {
        let (a, b) = (pair[0] as u64, pair[1] as u64);
        assert_eq!(gcd(a, b), 1);
    }
}

#[test]
fn test_factorization_of_fibonacci_numbers() {
    // fib(11) = 144 = 2^4 * 3^2 with the 1, 1, 2, ... indexing
    let n = u64::try_from(algokit_math::fibonacci(11).unwrap()).unwrap();
    assert_eq!(n, 144);
    let factors: Vec<u64> = prime_factors(n).unwrap().collect();
    assert_eq!(factors, vec![2, 2, 2, 2, 3, 3]);
}
