use thiserror::Error;

pub mod field {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum Error {
        #[error("division by zero: no inverse exists for a value congruent to 0 mod p")]
        DivisionByZero,
    }
}

pub mod interpolation {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum Error {
        #[error("cannot interpolate an empty combination")]
        EmptyCombination,
        #[error("duplicate abscissa: two points share the same x mod p")]
        DuplicateAbscissa,
    }
}

pub use field::Error as FieldError;
pub use interpolation::Error as InterpolationError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

pub type Error = MathError;
