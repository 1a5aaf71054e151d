//! Arithmetic over GF(2^8) modulo x^8 + x^4 + x^3 + x + 1, and Lagrange interpolation of
//! shares over that field.
//!
//! - [`GF`]: a field element, with table-driven multiplication, division, logarithm and power.
//! - [`Share`]: an x-coordinate with one y-value per polynomial.
//! - [`interpolate`]: evaluates at any x the polynomials through a set of shares.
//!
//! ```
//! use gf256_lagrange::{interpolate, Share, GF};
//!
//! let shares = [Share::from_bytes(1, &[5]), Share::from_bytes(2, &[9])];
//! let at_zero = interpolate(&shares, GF::ZERO).unwrap();
//! assert_eq!(at_zero.ys_bytes(), vec![1]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod core;
pub mod mpc;

pub use crate::core::gf256::{FieldError, GF};
pub use crate::mpc::{evaluate_polynomial, interpolate, MpcError, Share};
