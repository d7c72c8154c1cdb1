use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::errors::ValidationError;
use crate::field::PrimeField;

/// Sharing polynomial `a0 + a1*x + ... + a(t-1)*x^(t-1)` with `a0` the secret.
///
/// Lives for a single sharing session. It is deliberately neither `Clone`
/// nor serializable.
#[derive(Debug)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Samples a degree `threshold - 1` polynomial hiding `secret`.
    ///
    /// Higher coefficients are uniform in `[1, p - 1]`. They must come from a
    /// cryptographically secure source: predictable coefficients give the
    /// secret away, hence the `CryptoRng` bound.
    pub fn generate<R: RngCore + CryptoRng>(
        secret: &BigUint,
        threshold: usize,
        field: &PrimeField,
        rng: &mut R,
    ) -> Result<Self, ValidationError> {
        if threshold == 0 {
            return Err(ValidationError::ZeroThreshold);
        }
        // t <= n and share indices are u32
        if u32::try_from(threshold).is_err() {
            return Err(ValidationError::ThresholdOverflow(threshold));
        }
        if !field.contains(secret) {
            return Err(ValidationError::SecretOutOfRange);
        }

        let mut coefficients = Vec::with_capacity(threshold);
        coefficients.push(secret.clone());
        for _ in 1..threshold {
            coefficients.push(rng.gen_biguint_range(&BigUint::one(), field.prime()));
        }

        Ok(Polynomial { coefficients })
    }

    /// Builds a polynomial from fixed coefficients, lowest degree first.
    pub fn from_coefficients(
        coefficients: Vec<BigUint>,
        field: &PrimeField,
    ) -> Result<Self, ValidationError> {
        if coefficients.is_empty() {
            return Err(ValidationError::ZeroThreshold);
        }
        let coefficients = coefficients.iter().map(|c| field.reduce(c)).collect();
        Ok(Polynomial { coefficients })
    }

    /// Horner evaluation, reducing after every step.
    pub fn evaluate(&self, x: &BigUint, field: &PrimeField) -> BigUint {
        let mut result = BigUint::zero();
        for c in self.coefficients.iter().rev() {
            result = field.add(&field.mul(&result, x), c);
        }
        result
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    pub fn secret(&self) -> &BigUint {
        &self.coefficients[0]
    }

    /// Number of shares needed to recover the constant term.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn big(v: u32) -> BigUint {
        BigUint::from(v)
    }

    fn field() -> PrimeField {
        PrimeField::new(big(2089)).unwrap()
    }

    #[test]
    fn test_generate_shape() {
        let f = field();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let poly = Polynomial::generate(&big(42), 4, &f, &mut rng).unwrap();

        assert_eq!(poly.threshold(), 4);
        assert_eq!(poly.degree(), 3);
        assert_eq!(poly.secret(), &big(42));
        for c in &poly.coefficients()[1..] {
            assert!(!c.is_zero());
            assert!(f.contains(c));
        }
    }

    #[test]
    fn test_generate_rejects_bad_input() {
        let f = field();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        assert_eq!(
            Polynomial::generate(&big(42), 0, &f, &mut rng).unwrap_err(),
            ValidationError::ZeroThreshold
        );
        assert_eq!(
            Polynomial::generate(&big(2089), 2, &f, &mut rng).unwrap_err(),
            ValidationError::SecretOutOfRange
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_generate_rejects_oversized_threshold() {
        let f = field();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        assert_eq!(
            Polynomial::generate(&big(42), usize::MAX, &f, &mut rng).unwrap_err(),
            ValidationError::ThresholdOverflow(usize::MAX)
        );
        assert_eq!(
            Polynomial::generate(&big(42), u32::MAX as usize + 1, &f, &mut rng).unwrap_err(),
            ValidationError::ThresholdOverflow(u32::MAX as usize + 1)
        );
    }

    #[test]
    fn test_fresh_coefficients_per_session() {
        let f = PrimeField::new((BigUint::one() << 127usize) - BigUint::one()).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let a = Polynomial::generate(&big(5), 3, &f, &mut rng).unwrap();
        let b = Polynomial::generate(&big(5), 3, &f, &mut rng).unwrap();
        assert_ne!(a.coefficients()[1..], b.coefficients()[1..]);
    }

    #[test]
    fn test_horner_matches_expansion() {
        let f = field();
        let poly = Polynomial::from_coefficients(vec![big(42), big(166), big(94)], &f).unwrap();
        for x in 1..=50u32 {
            let expanded = (42 + 166 * x + 94 * x * x) % 2089;
            assert_eq!(poly.evaluate(&big(x), &f), big(expanded));
        }
    }

    #[test]
    fn test_constant_polynomial() {
        let f = field();
        let poly = Polynomial::from_coefficients(vec![big(7)], &f).unwrap();
        assert_eq!(poly.degree(), 0);
        assert_eq!(poly.evaluate(&big(1), &f), big(7));
        assert_eq!(poly.evaluate(&big(1000), &f), big(7));
    }

    #[test]
    fn test_from_coefficients_reduces() {
        let f = field();
        let poly = Polynomial::from_coefficients(vec![big(2089 + 1), big(2089 * 2)], &f).unwrap();
        assert_eq!(poly.coefficients(), &[big(1), big(0)]);
        assert!(Polynomial::from_coefficients(vec![], &f).is_err());
    }
}
