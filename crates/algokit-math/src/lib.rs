//! Algokit Math — primes, elementary number theory and integer sequences.
//!
//! # Modules
//!
//! - [`primes`]: factorization, primality, the sieve and prime generators
//! - [`numbers`]: gcd, lcm, extended Euclid and modular exponentiation
//! - [`sequences`]: Fibonacci numbers

pub mod numbers;
pub mod primes;
pub mod sequences;

mod proptests;

pub use numbers::{extended_gcd, gcd, lcm, mod_pow};
pub use primes::{
    MAX_SIEVE_BOUND, PrimeFactors, is_prime, prime_factors, prime_sieve, primes_naive,
    primes_trial_division,
};
pub use sequences::{Fibonacci, fibonacci};
