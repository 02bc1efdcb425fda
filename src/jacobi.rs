//! # Jacobi — Symbol Evaluation Specialized to h·2^n − 1
//!
//! Computes J(x, N) for N = h·2^n − 1 without ever materializing N. Three
//! facts about the form carry the whole computation down to machine-sized
//! operands:
//!
//! 1. J(2, N) = −1 exactly when n = 2, so stripping factors of two from x
//!    flips the sign only in that one case.
//! 2. When h ≡ 0 (mod x) with x odd, N ≡ −1 (mod x); the reciprocity factor
//!    (−1)^((N−1)/2·(x−1)/2) and J(−1, x) then always agree in sign, so
//!    J(x, N) = +1 outright.
//! 3. Otherwise reciprocity gives J(x, N) = ±J(N mod x, x) with a sign flip
//!    exactly when x ≡ 3 (mod 4), and N mod x = ((h mod x)·(2^n mod x) − 1)
//!    mod x is machine arithmetic.
//!
//! A zero symbol along the way means gcd(x, N) > 1: the caller learns a
//! factor of N and the candidate needs no further testing.
//!
//! The seed search evaluates many symbols against the same N, so J(N mod x, x)
//! results can be memoized in a caller-owned [`JacobiCache`]; the cache lives
//! for one search and dies with it.

use std::collections::HashMap;

use rug::Integer;

use crate::error::{Error, Result};
use crate::mathutil;

/// Memo of J(N mod x, x) keyed by the odd reduced x, scoped to one search.
pub type JacobiCache = HashMap<u64, i32>;

/// J(x, N) for N = h·2^n − 1, in {−1, +1}.
///
/// Returns [`Error::KnownFactor`] when gcd(x, N) > 1: N is composite and
/// the witness divisor is reported. Requires x ≥ 1, h ≥ 1 odd, n ≥ 2.
pub fn jacobi(x: u64, h: u64, n: u64, cache: Option<&mut JacobiCache>) -> Result<i32> {
    if x < 1 {
        return Err(Error::Precondition(format!(
            "expected x >= 1, but received x = {x}"
        )));
    }

    let mut x = x;
    let mut sign = 1i32;

    // J(2, N) = (-1)^((N^2-1)/8) = -1 only when n = 2.
    while x & 1 == 0 {
        x >>= 1;
        if n == 2 {
            sign = -sign;
        }
    }

    let h_mod_x = h % x;
    if h_mod_x == 0 {
        // N = -1 (mod x): J(-1, x) and the reciprocity factor share the
        // parity of (x-1)/2, so their product is always +1.
        return Ok(sign);
    }

    // J(x, N) = J(N mod x, x) * (-1)^((N-1)/2 * (x-1)/2); with h*2^(n-1) - 1
    // odd, the flip depends only on x mod 4.
    if x % 4 == 3 {
        sign = -sign;
    }

    let j_nx = match cache {
        Some(cache) => {
            if let Some(&val) = cache.get(&x) {
                val
            } else {
                let val = jacobi_n_mod_x(x, h_mod_x, n)?;
                cache.insert(x, val);
                val
            }
        }
        None => jacobi_n_mod_x(x, h_mod_x, n)?,
    };

    Ok(sign * j_nx)
}

/// J(N mod x, x) for odd x coprime to h, via the generic symbol on
/// machine-sized operands.
fn jacobi_n_mod_x(x: u64, h_mod_x: u64, n: u64) -> Result<i32> {
    let two_n_mod_x = mathutil::mod_exp(2, n, x)?;

    // (h * 2^n - 1) mod x without overflow; adding x - 1 stands in for the -1.
    let n_mod_x = ((h_mod_x as u128 * two_n_mod_x as u128 + x as u128 - 1) % x as u128) as u64;

    if n_mod_x == 0 && x != 1 {
        return Err(Error::KnownFactor(x));
    }

    let j = Integer::from(n_mod_x).jacobi(&Integer::from(x));
    if j == 0 {
        return Err(Error::KnownFactor(mathutil::gcd(n_mod_x, x)));
    }

    Ok(j)
}
