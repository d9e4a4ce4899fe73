pub mod error;
pub mod field;
pub mod interpolate;

pub use interpolate::interpolate_at_zero;
