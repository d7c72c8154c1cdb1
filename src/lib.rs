//! Shamir threshold secret sharing over a prime field.
//!
//! A secret is split into `n` shares, any `t` of which recover it by
//! Lagrange interpolation while `t - 1` of them are independent of it.
//!
//! ```
//! use num_bigint::BigUint;
//! use threshold_wallet::{split_secure, ShareSet};
//!
//! let prime = BigUint::from(2089u32);
//! let shares = split_secure(&BigUint::from(42u32), 5, 3, &prime).unwrap();
//! let set = ShareSet::select(&shares, &[1, 3, 5]).unwrap();
//! assert_eq!(set.reconstruct(&prime).unwrap(), BigUint::from(42u32));
//! ```
pub mod errors;
pub mod field;
pub mod params;
pub mod polynomial;
pub mod reconstruct;
pub mod share;

pub use errors::*;
pub use field::*;
pub use params::*;
pub use polynomial::*;
pub use reconstruct::*;
pub use share::*;
