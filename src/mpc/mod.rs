//! Shares and Lagrange interpolation over GF(256).
//!
//! # Components
//! - `share`: Definition of a share (one x-coordinate, several y-values).
//! - `polynomial`: Horner evaluation of a polynomial at a point.
//! - `interpolate`: Log-domain Lagrange interpolation of a share set at any x.
//!
//! # Security
//! - **Zeroization**: Share y-values are zeroized on drop.
//! - **Validation**: Interpolation rejects short, ragged and duplicate share sets.

pub mod share;
pub mod interpolate;
pub(crate) mod polynomial;

use core::fmt;
use crate::core::gf256::FieldError;

pub use interpolate::interpolate;
pub use polynomial::evaluate_polynomial;
pub use share::Share;

/// Errors for share operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpcError {
    /// Fewer than 2 shares passed to interpolation.
    TooFewShares,
    /// Shares carry y-vectors of different lengths.
    MismatchedShareWidth,
    /// Two shares have the same x-coordinate.
    DuplicateXValue,
    /// Underlying field operation failed.
    Field(FieldError),
}

impl fmt::Display for MpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpcError::TooFewShares => write!(f, "At least 2 shares are required"),
            MpcError::MismatchedShareWidth => write!(f, "Shares have different widths"),
            MpcError::DuplicateXValue => write!(f, "Duplicate share x-coordinate"),
            MpcError::Field(e) => write!(f, "Field error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MpcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MpcError::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldError> for MpcError {
    fn from(e: FieldError) -> Self {
        MpcError::Field(e)
    }
}
