use std::collections::HashSet;

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::errors::{ArithmeticError, Result, ValidationError};
use crate::field::PrimeField;
use crate::polynomial::Polynomial;
use crate::reconstruct::reconstruct;

/// A point `(x, f(x))` on the sharing polynomial. `x` identifies the participant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    pub x: u32,
    pub y: BigUint,
}

impl Share {
    pub fn new(x: u32, y: BigUint) -> Self {
        Share { x, y }
    }
}

/// Splits `secret` into `share_count` shares, any `threshold` of which recover it.
///
/// Share `i` (zero based) sits at `x = i + 1`. Reconstructing from fewer than
/// `threshold` of these shares still returns a field element, not the secret
/// and not an error: keeping track of `threshold` is up to the caller.
pub fn split<R: RngCore + CryptoRng>(
    secret: &BigUint,
    share_count: usize,
    threshold: usize,
    prime: &BigUint,
    rng: &mut R,
) -> Result<Vec<Share>> {
    let field = validate_sharing(share_count, threshold, prime)?;
    let polynomial = Polynomial::generate(secret, threshold, &field, rng)?;
    shares_from_polynomial(&polynomial, share_count, &field)
}

/// [`split`] with a fresh operating system rng scoped to this call.
pub fn split_secure(
    secret: &BigUint,
    share_count: usize,
    threshold: usize,
    prime: &BigUint,
) -> Result<Vec<Share>> {
    let mut rng = OsRng;
    split(secret, share_count, threshold, prime, &mut rng)
}

/// Evaluates `polynomial` at `1..=share_count`.
///
/// Applies the same share count and modulus checks as [`split`].
pub fn shares_from_polynomial(
    polynomial: &Polynomial,
    share_count: usize,
    field: &PrimeField,
) -> Result<Vec<Share>> {
    let last = check_counts(share_count, polynomial.threshold())?;
    check_modulus(field, share_count)?;

    Ok((1..=last)
        .map(|x| Share::new(x, polynomial.evaluate(&BigUint::from(x), field)))
        .collect())
}

/// Checks the public sharing parameters and returns the field they define.
pub(crate) fn validate_sharing(
    share_count: usize,
    threshold: usize,
    prime: &BigUint,
) -> std::result::Result<PrimeField, ValidationError> {
    check_counts(share_count, threshold)?;
    let field = PrimeField::new(prime.clone())?;
    check_modulus(&field, share_count)?;
    Ok(field)
}

/// Returns the last share index, `share_count` as a `u32`.
fn check_counts(share_count: usize, threshold: usize) -> std::result::Result<u32, ValidationError> {
    if share_count == 0 {
        return Err(ValidationError::ZeroShareCount);
    }
    if threshold == 0 {
        return Err(ValidationError::ZeroThreshold);
    }
    if threshold > share_count {
        return Err(ValidationError::ThresholdExceedsShareCount {
            threshold,
            share_count,
        });
    }
    u32::try_from(share_count).map_err(|_| ValidationError::ShareCountOverflow(share_count))
}

// x = 1..=n must be distinct and non-zero modulo p, or share x = p is the secret
fn check_modulus(field: &PrimeField, share_count: usize) -> std::result::Result<(), ValidationError> {
    if field.prime() <= &BigUint::from(share_count) {
        return Err(ValidationError::ModulusTooSmall {
            prime: field.prime().clone(),
            share_count,
        });
    }
    Ok(())
}

/// Shares picked for one reconstruction attempt, with pairwise distinct x.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    shares: Vec<Share>,
}

impl ShareSet {
    pub fn new(shares: Vec<Share>) -> Result<Self> {
        if shares.is_empty() {
            return Err(ValidationError::EmptyShareSet.into());
        }
        let mut seen = HashSet::with_capacity(shares.len());
        for share in &shares {
            if !seen.insert(share.x) {
                return Err(ArithmeticError::DuplicateShareIndex(share.x).into());
            }
        }
        Ok(ShareSet { shares })
    }

    /// Looks up shares by participant index (their x) in `all_shares`.
    ///
    /// Any number of indices is accepted; [`Parameters::select`] also checks
    /// that exactly `threshold` shares are picked.
    ///
    /// [`Parameters::select`]: crate::params::Parameters::select
    pub fn select(all_shares: &[Share], indices: &[u32]) -> Result<Self> {
        let selected = indices
            .iter()
            .map(|&index| {
                all_shares
                    .iter()
                    .find(|share| share.x == index)
                    .cloned()
                    .ok_or(ValidationError::UnknownShareIndex(index))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        ShareSet::new(selected)
    }

    pub fn reconstruct(&self, prime: &BigUint) -> Result<BigUint> {
        reconstruct(&self.shares, prime)
    }

    pub fn indices(&self) -> Vec<u32> {
        self.shares.iter().map(|share| share.x).collect()
    }

    pub fn as_slice(&self) -> &[Share] {
        &self.shares
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

impl IntoIterator for ShareSet {
    type Item = Share;
    type IntoIter = std::vec::IntoIter<Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.into_iter()
    }
}
