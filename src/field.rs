use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::{ArithmeticError, ValidationError};

/// Miller-Rabin rounds used when validating a modulus.
const PRIMALITY_ROUNDS: usize = 20;

/// Arithmetic in Z/pZ for a prime p checked at construction.
///
/// Every operation reduces its inputs first and returns a value in `[0, p)`,
/// so callers may pass unreduced integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    prime: BigUint,
}

impl PrimeField {
    pub fn new(prime: BigUint) -> Result<Self, ValidationError> {
        if !is_probable_prime(&prime) {
            return Err(ValidationError::CompositeModulus(prime));
        }
        Ok(PrimeField { prime })
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// True when `a` is already a canonical field element.
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.prime
    }

    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.prime
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.prime
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.prime - b + a
        }
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.prime
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    pub fn modinv(&self, a: &BigUint) -> Result<BigUint, ArithmeticError> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(ArithmeticError::NotInvertible(a));
        }

        let modulus = BigInt::from(self.prime.clone());
        let egcd = BigInt::from(a.clone()).extended_gcd(&modulus);
        if !egcd.gcd.is_one() {
            return Err(ArithmeticError::NotInvertible(a));
        }

        // x * a + y * p = 1, so x is the inverse once brought into [0, p)
        let (_, inverse) = egcd.x.mod_floor(&modulus).into_parts();
        Ok(inverse)
    }
}

/// Probabilistic primality check. Values below 2 are never prime.
pub fn is_probable_prime(candidate: &BigUint) -> bool {
    if candidate < &BigUint::from(2u32) {
        return false;
    }
    let candidate = num_bigint_dig::BigUint::from_bytes_be(&candidate.to_bytes_be());
    num_bigint_dig::prime::probably_prime(&candidate, PRIMALITY_ROUNDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(p: u32) -> PrimeField {
        PrimeField::new(BigUint::from(p)).unwrap()
    }

    fn big(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_rejects_composite_and_tiny_moduli() {
        for p in [0u32, 1, 4, 9, 2088, 561] {
            assert_eq!(
                PrimeField::new(big(p)),
                Err(ValidationError::CompositeModulus(big(p)))
            );
        }
        assert!(PrimeField::new(big(2)).is_ok());
        assert!(PrimeField::new(big(2089)).is_ok());
    }

    #[test]
    fn test_add_mul_stay_in_range() {
        let f = field(17);
        assert_eq!(f.add(&big(9), &big(8)), big(0));
        assert_eq!(f.add(&big(16), &big(16)), big(15));
        assert_eq!(f.mul(&big(5), &big(7)), big(1));
        assert_eq!(f.mul(&big(100), &big(100)), big(4));
    }

    #[test]
    fn test_sub_and_neg_wrap() {
        let f = field(17);
        assert_eq!(f.sub(&big(3), &big(5)), big(15));
        assert_eq!(f.sub(&big(5), &big(3)), big(2));
        assert_eq!(f.neg(&big(1)), big(16));
        assert_eq!(f.neg(&big(0)), big(0));
        assert_eq!(f.neg(&big(34)), big(0));
    }

    #[test]
    fn test_modinv() {
        let f = field(2089);
        for a in 1..200u32 {
            let inv = f.modinv(&big(a)).unwrap();
            assert!(f.contains(&inv));
            assert_eq!(f.mul(&big(a), &inv), big(1));
        }
    }

    #[test]
    fn test_modinv_of_zero_fails() {
        let f = field(2089);
        assert_eq!(
            f.modinv(&big(0)),
            Err(ArithmeticError::NotInvertible(big(0)))
        );
        assert_eq!(
            f.modinv(&big(2089 * 3)),
            Err(ArithmeticError::NotInvertible(big(0)))
        );
    }

    #[test]
    fn test_large_prime_inverse() {
        // 2^127 - 1
        let p = (BigUint::one() << 127usize) - BigUint::one();
        let f = PrimeField::new(p.clone()).unwrap();
        let a = &p - big(12345);
        let inv = f.modinv(&a).unwrap();
        assert_eq!(f.mul(&a, &inv), BigUint::one());
    }
}
