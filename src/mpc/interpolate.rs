//! Lagrange interpolation of shares.
//!
//! Given $n$ shares with distinct x-coordinates, each carrying $m$ y-values, this module
//! evaluates at any point the $m$ polynomials of degree $n - 1$ passing through them.
//!
//! The basis coefficients are computed in the logarithmic domain:
//!
//! $$L_s(x) = \prod_{t \ne s} \frac{x_t - x}{x_s - x_t}$$
//!
//! The numerator is the product over all shares divided by $(x_s - x)$, so with
//! $a = \sum_t \log(x_t - x)$ the log of $L_s(x)$ is
//! $a - \log(x_s - x) - \sum_{t \ne s} \log(x_s - x_t)$. Every product and quotient becomes an
//! integer addition and the only table lookups are one `log` per difference and one `exp`
//! per output term. Signs vanish in characteristic 2.
//!
//! # Complexity
//! O(n·(n+m)) time, O(m) extra space.

extern crate alloc;
use alloc::vec;
use crate::core::gf256::GF;
use crate::mpc::{MpcError, share::Share};

/// Evaluates at `x` the polynomials through `shares`.
///
/// For every index `j`, the returned share holds at position `j` the value at `x` of the
/// unique polynomial of degree `shares.len() - 1` through the points `(s.x, s.ys[j])`.
///
/// If `x` is the x-coordinate of one of the shares, a copy of that share is returned. When
/// several shares have that x-coordinate, which one is returned is unspecified.
///
/// # Returns
/// * `Ok(Share)` - A share with x-coordinate `x`.
/// * `Err(MpcError::TooFewShares)` - Fewer than 2 shares.
/// * `Err(MpcError::MismatchedShareWidth)` - The y-vectors differ in length.
/// * `Err(MpcError::DuplicateXValue)` - Two shares have the same x-coordinate.
pub fn interpolate(shares: &[Share], x: GF) -> Result<Share, MpcError> {
    if shares.len() < 2 {
        log::debug!("interpolate: rejected {} share(s), need at least 2", shares.len());
        return Err(MpcError::TooFewShares);
    }

    let width = shares[0].width();
    if let Some(i) = shares.iter().position(|s| s.width() != width) {
        log::debug!(
            "interpolate: share {} has width {}, expected {}",
            i,
            shares[i].width(),
            width
        );
        return Err(MpcError::MismatchedShareWidth);
    }

    // a = log(prod_t (x_t - x)), kept in [0, 255)
    let mut a: i32 = 0;
    for s in shares {
        let d = s.x - x;
        if d.is_zero() {
            log::trace!("interpolate: x = {} is a known share", x);
            return Ok(s.clone());
        }
        a = (a + d.log()? as i32) % GF::ORDER;
    }

    let mut ys = vec![GF::ZERO; width];
    for (i, s) in shares.iter().enumerate() {
        // b = log(L_s(x))
        let mut b = (a - (s.x - x).log()? as i32).rem_euclid(GF::ORDER);
        for (j, t) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let d = s.x - t.x;
            if d.is_zero() {
                log::debug!("interpolate: shares {} and {} both have x = {}", i, j, s.x);
                return Err(MpcError::DuplicateXValue);
            }
            b = (b - d.log()? as i32).rem_euclid(GF::ORDER);
        }

        for (acc, &y) in ys.iter_mut().zip(&s.ys) {
            if y.is_zero() {
                continue;
            }
            *acc += GF::exp(b + y.log()? as i32);
        }
    }

    Ok(Share::new(x, ys))
}
