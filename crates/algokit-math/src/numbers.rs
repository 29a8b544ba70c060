//! Elementary number theory.

use algokit_core::{Error, Result};

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is 0.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple.
///
/// Returns 0 when either argument is 0, and `Overflow` when the result
/// does not fit in a `u64`.
///
/// ```
/// use algokit_math::lcm;
///
/// assert_eq!(lcm(4, 6).unwrap(), 12);
/// assert!(lcm(u64::MAX, u64::MAX - 1).is_err());
/// ```
pub fn lcm(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or_else(|| Error::overflow("lcm"))
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(a, b) >= 0` and `a*x + b*y = g`.
/// The work is done in `i128`. Returns `Overflow` when a result does not
/// fit back into `i64`, as for `extended_gcd(i64::MIN, 0)` whose gcd is
/// `2^63`.
///
/// ```
/// use algokit_math::extended_gcd;
///
/// let (g, x, y) = extended_gcd(240, 46).unwrap();
/// assert_eq!(g, 2);
/// assert_eq!(240 * x + 46 * y, 2);
/// ```
pub fn extended_gcd(a: i64, b: i64) -> Result<(i64, i64, i64)> {
    let (mut old_r, mut r) = (i128::from(a), i128::from(b));
    let (mut old_x, mut x) = (1i128, 0i128);
    let (mut old_y, mut y) = (0i128, 1i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    if old_r < 0 {
        (old_r, old_x, old_y) = (-old_r, -old_x, -old_y);
    }
    let narrow = |v: i128| i64::try_from(v).map_err(|_| Error::overflow("extended gcd"));
    Ok((narrow(old_r)?, narrow(old_x)?, narrow(old_y)?))
}

/// `base^exp mod modulus` by binary exponentiation.
///
/// Intermediate products are taken in `u128`, so any `u64` modulus works.
/// Returns `InvalidInput` for a zero modulus.
///
/// ```
/// use algokit_math::mod_pow;
///
/// assert_eq!(mod_pow(4, 13, 497).unwrap(), 445);
/// assert_eq!(mod_pow(7, 0, 13).unwrap(), 1);
/// ```
pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(Error::invalid_input("modulus must be positive"));
    }
    let m = u128::from(modulus);
    let mut result: u128 = 1 % m;
    let mut base = u128::from(base) % m;
    let mut exp = exp;

    while exp > 0 {
        if exp % 2 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp /= 2;
    }

    // result < m <= u64::MAX
    Ok(u64::try_from(result).unwrap_or(u64::MAX))
}
