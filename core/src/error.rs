use math::error::InterpolationError;
use thiserror::Error;

/// Result type specialized for secret recovery operations.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Errors that can arise while recovering a secret from shares.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("Insufficient shares: need {0}, got {1}")]
    InsufficientShares(usize, usize),
    #[error("No combination of shares produced a candidate secret")]
    NoConsensus,
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
