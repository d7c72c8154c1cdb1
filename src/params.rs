use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::field::PrimeField;
use crate::share::{split, split_secure, validate_sharing, Share, ShareSet};

/// Small prime used by the demonstration session.
pub const DEMO_PRIME: u32 = 2089;

/// Public setup of one sharing: t, n and the field modulus.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Parameters {
    pub threshold: usize,   //t
    pub share_count: usize, //n
    pub prime: BigUint,
}

impl Parameters {
    pub fn new(threshold: usize, share_count: usize, prime: BigUint) -> Self {
        Parameters {
            threshold,
            share_count,
            prime,
        }
    }

    pub fn demo(threshold: usize, share_count: usize) -> Self {
        Self::new(threshold, share_count, BigUint::from(DEMO_PRIME))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<PrimeField> {
        Ok(validate_sharing(self.share_count, self.threshold, &self.prime)?)
    }

    pub fn split<R: RngCore + CryptoRng>(&self, secret: &BigUint, rng: &mut R) -> Result<Vec<Share>> {
        split(secret, self.share_count, self.threshold, &self.prime, rng)
    }

    pub fn split_secure(&self, secret: &BigUint) -> Result<Vec<Share>> {
        split_secure(secret, self.share_count, self.threshold, &self.prime)
    }

    /// Picks exactly `threshold` shares by participant index for reconstruction.
    pub fn select(&self, all_shares: &[Share], indices: &[u32]) -> Result<ShareSet> {
        if indices.len() != self.threshold {
            return Err(ValidationError::WrongSelectionSize {
                expected: self.threshold,
                selected: indices.len(),
            }
            .into());
        }
        ShareSet::select(all_shares, indices)
    }
}
