//! # Riesel — Candidate Representation and Specialized Reduction
//!
//! A Riesel candidate is N = h·2^n − 1 with h odd, h ≥ 1, n ≥ 2 and h < 2^n.
//! [`RieselNumber`] normalizes any even h by moving its factors of two into
//! the exponent, so every consumer sees the canonical form.
//!
//! [`riesel_mod`] replaces generic long division for `a mod N`: because
//! h·2^n ≡ 1 (mod N), the high part of `a` above bit n can be folded back in
//! with a shift, an add, and a divmod by the (machine-sized) h. For the
//! multi-million-bit intermediates of the Lucas iteration this is the
//! difference between a shift-and-add pass and a full big-integer division.

use std::cmp::Ordering;
use std::fmt;

use rug::ops::RemRounding;
use rug::Integer;

use crate::error::{Error, Result};
use crate::mathutil;

/// A number of the form h·2^n − 1, normalized so that h is odd.
///
/// Immutable once constructed; shared by reference across the whole test.
/// Both the machine-sized and the arbitrary-precision form of h are kept,
/// since the reduction divmods by h on every fold.
#[derive(Debug, Clone)]
pub struct RieselNumber {
    pub h: u64,
    pub n: u64,
    pub h_big: Integer,
    /// The candidate itself: h·2^n − 1.
    pub value: Integer,
}

impl RieselNumber {
    /// Build the canonical representation of h·2^n − 1.
    ///
    /// Even h is reduced to odd, adding the removed power of two to n.
    /// Rejects h < 1, n < 2, h > 2^63 − 1 and (after normalization) h ≥ 2^n,
    /// which would fall outside the Riesel form.
    pub fn new(h: u64, n: u64) -> Result<Self> {
        if h < 1 {
            return Err(Error::Precondition(format!(
                "expected h >= 1, but received h = {h}"
            )));
        }
        if n < 2 {
            return Err(Error::Precondition(format!(
                "expected n >= 2, but received n = {n}"
            )));
        }

        let mut h = h;
        let mut n = n;

        // Make h odd by moving powers of two over to 2^n.
        let lbit = mathutil::lower_non_zero_bit(h)?;
        if lbit > 0 {
            h >>= lbit;
            n += u64::from(lbit);
        }

        if h > i64::MAX as u64 {
            return Err(Error::Precondition(format!(
                "expected h <= 2^63 - 1, but received h = {h}"
            )));
        }
        if u64::from(mathutil::bit_len(h)) > n {
            return Err(Error::Precondition(format!(
                "expected h < 2^n, but received h = {h} and n = {n}"
            )));
        }
        if n > u64::from(u32::MAX) {
            return Err(Error::Precondition(format!(
                "expected n <= 2^32 - 1, but received n = {n}"
            )));
        }

        let h_big = Integer::from(h);
        let value = (Integer::from(h) << n as u32) - 1u32;

        Ok(RieselNumber { h, n, h_big, value })
    }

    /// Re-check the construction invariants; entry points of the engine call
    /// this so that a hand-rolled struct literal cannot bypass them.
    pub(crate) fn check(&self) -> Result<()> {
        if self.h < 1 {
            return Err(Error::Precondition(format!(
                "expected h >= 1, but received h = {}",
                self.h
            )));
        }
        if self.n < 2 {
            return Err(Error::Precondition(format!(
                "expected n >= 2, but received n = {}",
                self.n
            )));
        }
        if self.h % 2 == 0 {
            return Err(Error::Precondition(format!(
                "expected odd h, but received h = {}",
                self.h
            )));
        }
        Ok(())
    }
}

impl fmt::Display for RieselNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * 2^{} - 1", self.h, self.n)
    }
}

/// Reduce `a` modulo N = h·2^n − 1 in place, leaving 0 ≤ a < N.
///
/// Splitting a = j·2^n + k, the identity h·2^n ≡ 1 (mod N) gives
/// 2^n ≡ 1/h, so with j = q·h + m we get a ≡ m·2^n + k + q. When h = 1 this
/// collapses to a ≡ k + j. Each pass strips n bits off `a`, so the loop runs
/// O(bits(a)/n) times with only shifts, adds and a divmod by the small h.
///
/// Machine-sized moduli and negative inputs take the generic euclidean path.
pub fn riesel_mod(a: &mut Integer, r: &RieselNumber) {
    if a.cmp0() == Ordering::Less || r.value.to_i64().is_some() {
        let reduced = std::mem::take(a).rem_euc(&r.value);
        *a = reduced;
        return;
    }

    let shift = r.n as u32;
    while *a > r.value {
        if u64::from(a.significant_bits()) <= r.n {
            // a < 2^n <= N would contradict the loop condition unless a == N,
            // which the final fixup below handles.
            break;
        }

        let j = Integer::from(&*a >> shift);
        let shifted = Integer::from(&j << shift);
        let k = Integer::from(&*a - &shifted);

        if r.h == 1 {
            *a = k + j;
        } else {
            let (q, m) = j.div_rem(r.h_big.clone());
            *a = (m << shift) + k + q;
        }
    }

    if *a == r.value {
        *a = Integer::new();
    }
}
