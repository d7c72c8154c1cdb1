use num_bigint::BigUint;
use thiserror::Error;

/// Bad parameters or inputs. Raised before any arithmetic is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("share count must be at least 1")]
    ZeroShareCount,
    #[error("threshold must be at least 1")]
    ZeroThreshold,
    #[error("threshold exceeds share count ({threshold} > {share_count})")]
    ThresholdExceedsShareCount { threshold: usize, share_count: usize },
    #[error("modulus {0} is not prime")]
    CompositeModulus(BigUint),
    #[error("prime {prime} must be greater than the share count {share_count}")]
    ModulusTooSmall { prime: BigUint, share_count: usize },
    #[error("secret must be less than the prime modulus")]
    SecretOutOfRange,
    #[error("value of share {x} is not a field element")]
    ShareValueOutOfRange { x: u32 },
    #[error("no share with index {0}")]
    UnknownShareIndex(u32),
    #[error("exactly {expected} shares must be selected, got {selected}")]
    WrongSelectionSize { expected: usize, selected: usize },
    #[error("point {index} requested from {len} interpolation points")]
    PointIndexOutOfRange { index: usize, len: usize },
    #[error("no shares supplied")]
    EmptyShareSet,
    #[error("cannot index {0} shares with 32-bit share indices")]
    ShareCountOverflow(usize),
    #[error("threshold {0} does not fit a 32-bit share index")]
    ThresholdOverflow(usize),
}

/// Failures of field arithmetic during reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("{0} has no inverse modulo the prime")]
    NotInvertible(BigUint),
    #[error("duplicate share index {0}")]
    DuplicateShareIndex(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SssError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

pub type Result<T> = std::result::Result<T, SssError>;
