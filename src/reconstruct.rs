use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::{ArithmeticError, Result, ValidationError};
use crate::field::PrimeField;
use crate::share::Share;

/// Recovers the constant term of the sharing polynomial from `shares`.
///
/// The caller must pass at least `threshold` genuine shares of one sharing.
/// This cannot be checked here: with fewer shares the interpolation still
/// yields a field element, just not the secret.
///
/// Fails on an empty slice, on share values outside the field and on two
/// shares with the same x (taken modulo `prime`).
pub fn reconstruct(shares: &[Share], prime: &BigUint) -> Result<BigUint> {
    let field = PrimeField::new(prime.clone())?;
    interpolate_at_zero(&field, shares)
}

/// Performs a Lagrange interpolation in Z/pZ at the origin for the
/// polynomial going through `shares`.
pub fn interpolate_at_zero(field: &PrimeField, shares: &[Share]) -> Result<BigUint> {
    if shares.is_empty() {
        return Err(ValidationError::EmptyShareSet.into());
    }
    if let Some(share) = shares.iter().find(|share| !field.contains(&share.y)) {
        return Err(ValidationError::ShareValueOutOfRange { x: share.x }.into());
    }

    let points = distinct_points(field, shares)?;

    let mut acc = BigUint::zero();
    for (j, share) in shares.iter().enumerate() {
        let coefficient = lagrange_coefficient(field, &points, j)?;
        acc = field.add(&acc, &field.mul(&share.y, &coefficient));
    }
    Ok(acc)
}

/// `L_j(0) = prod_{m != j} (-x_m) / (x_j - x_m)` for pairwise distinct `points`.
///
/// Repeated points surface as [`ArithmeticError::NotInvertible`].
pub fn lagrange_coefficient(field: &PrimeField, points: &[BigUint], j: usize) -> Result<BigUint> {
    let xj = points.get(j).ok_or(ValidationError::PointIndexOutOfRange {
        index: j,
        len: points.len(),
    })?;
    let mut num = BigUint::one();
    let mut den = BigUint::one();

    for (m, xm) in points.iter().enumerate() {
        if m != j {
            num = field.mul(&num, &field.neg(xm));
            den = field.mul(&den, &field.sub(xj, xm));
        }
    }

    Ok(field.mul(&field.modinv(&den)?, &num))
}

/// Reduced x of every share, rejecting repeats before any inverse is taken.
fn distinct_points(field: &PrimeField, shares: &[Share]) -> Result<Vec<BigUint>> {
    let mut seen = HashSet::with_capacity(shares.len());
    let mut points = Vec::with_capacity(shares.len());
    for share in shares {
        let x = field.reduce(&BigUint::from(share.x));
        if !seen.insert(x.clone()) {
            return Err(ArithmeticError::DuplicateShareIndex(share.x).into());
        }
        points.push(x);
    }
    Ok(points)
}
