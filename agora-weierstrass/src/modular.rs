use crate::CurveError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Multiplicative inverse of `x` modulo `modulus` via the extended Euclidean
/// algorithm. The zero residue class is never invertible; every other residue
/// is, provided the modulus is prime.
pub fn mod_inv(x: &BigInt, modulus: &BigInt) -> Result<BigInt, CurveError> {
    let residue = x.mod_floor(modulus);
    if residue.is_zero() {
        return Err(CurveError::NoInverse);
    }
    let extended = residue.extended_gcd(modulus);
    if !extended.gcd.is_one() {
        // unreachable when the modulus is prime
        return Err(CurveError::NoInverse);
    }
    Ok(extended.x.mod_floor(modulus))
}
