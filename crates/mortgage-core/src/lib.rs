//! Amortized mortgage payment calculation.
//!
//! Two pure pieces: [`validation`] rejects out-of-policy loan inputs with a
//! specific, ordered error, and [`payment`] derives the fixed periodic
//! payment for the validated loan. All math in `rust_decimal::Decimal`.

pub mod error;
pub mod payment;
pub mod types;
pub mod validation;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-core operations
pub type MortgageResult<T> = Result<T, MortgageError>;
