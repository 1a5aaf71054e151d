//! Share Definition.
//!
//! A share is an evaluation point $x$ together with $m$ values $y_0 .. y_{m-1}$: the
//! evaluations at $x$ of $m$ distinct polynomials. Position $j$ of every share in a set
//! belongs to polynomial $j$.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe the y-values from memory.
//! - `Debug` implementation redacts the y-values; `Display` prints them for diagnostics.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};
use crate::core::gf256::GF;

/// One evaluation point of one or more polynomials.
///
/// Nothing is validated here; interpolation checks that the shares it is given have distinct
/// x-coordinates and equal widths.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Share {
    /// The x-coordinate. Public information.
    #[zeroize(skip)]
    pub x: GF,

    /// The y-coordinates, one per polynomial.
    pub ys: Vec<GF>,
}

impl Share {
    /// Creates a share from its x-coordinate and y-values.
    pub fn new(x: GF, ys: Vec<GF>) -> Self {
        Self { x, ys }
    }

    /// Builds a share from raw bytes.
    pub fn from_bytes(x: u8, ys: &[u8]) -> Self {
        Self {
            x: GF::new(x),
            ys: ys.iter().copied().map(GF::new).collect(),
        }
    }

    /// Number of y-values.
    pub fn width(&self) -> usize {
        self.ys.len()
    }

    /// Returns the y-values as raw bytes.
    pub fn ys_bytes(&self) -> Vec<u8> {
        self.ys.iter().copied().map(u8::from).collect()
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x)
            .field("width", &self.ys.len())
            .field("ys", &"***SENSITIVE***")
            .finish()
    }
}

/// Renders `{x: 0A, ys: [01 02 03]}`.
impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {}, ys: [", self.x)?;
        for (i, y) in self.ys.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", y)?;
        }
        f.write_str("]}")
    }
}
