//! Polynomial evaluation over GF(256).

use crate::core::gf256::GF;

/// Evaluates a polynomial at a given point x using Horner's method.
///
/// f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1)
///
/// # Arguments
/// * `coeffs` - Coefficients [c0, c1, ..., ck-1]
/// * `x` - The point to evaluate at
///
/// # Returns
/// * The value f(x); zero for an empty coefficient slice.
pub fn evaluate_polynomial(coeffs: &[GF], x: GF) -> GF {
    // result = c[k-1]
    // result = result * x + c[k-2]
    // ...
    // result = result * x + c[0]
    coeffs
        .iter()
        .rev()
        .fold(GF::ZERO, |acc, &c| acc * x + c)
}
