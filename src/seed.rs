//! # Seed — Finding a Valid V(1)
//!
//! The Lucas test needs a starting value V(1) whose companion discriminant
//! D = V(1)² − 4 satisfies Riesel's criteria against N. When h is not a
//! multiple of 3 the classical choice V(1) = 4 works outright (or 3 divides N
//! and the candidate is dead). When 3 | h, one of three interchangeable
//! scans finds a seed:
//!
//! - **Rodseth**: the first P ≥ 3 with J(P−2, N) = +1 and J(P+2, N) = −1.
//!   The default; it finds the smallest usable seed.
//! - **Riesel**: scans v ≥ 3 testing J(D, N) = −1 on the square-free part of
//!   v² − 4, then either the perfect-square shortcut on v − 2 or the second
//!   criterion J(v − 2, N) = +1.
//! - **Penne**: scans x ≥ 1 on the square-free part of x² + 4; a single
//!   J(D, N) = −1 suffices there, at the price of the larger seed x² + 2.
//!
//! All the symbol evaluations go through the specialized pipeline of
//! [`crate::jacobi`], sharing one memo per scan. A known factor surfacing
//! mid-scan ends the test: the candidate is composite.
//!
//! ## References
//!
//! - H. Riesel, "Lucasian Criteria for the Primality of N = h·2^n − 1",
//!   Mathematics of Computation, 23(108):869–875, 1969.
//! - Ö.J. Rödseth, "A note on primality tests for N = h·2^n − 1",
//!   BIT Numerical Mathematics, 34:451–454, 1994.
//! - Jean Penné's LLR software: <http://jpenne.free.fr/>

use tracing::debug;

use crate::error::{Error, Result};
use crate::jacobi::{self, JacobiCache};
use crate::mathutil;
use crate::riesel::RieselNumber;

/// Seed-search algorithm selector. The methods are interchangeable in
/// validity; they may return different (all valid) seeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedMethod {
    Riesel,
    #[default]
    Rodseth,
    Penne,
}

/// Find a valid V(1) for the candidate.
///
/// With h not a multiple of 3, parity decides everything: either 3 divides N
/// (reported as a known factor) or V(1) = 4. Otherwise the chosen scan runs.
pub fn gen_v1(r: &RieselNumber, method: SeedMethod) -> Result<u64> {
    r.check()?;

    let h_mod_3 = r.h % 3;
    if h_mod_3 != 0 {
        // 2^(2k) = +1 and 2^(2k+1) = -1 (mod 3), so these two parity
        // combinations force 3 | N.
        if (h_mod_3 == 1 && r.n & 1 == 0) || (h_mod_3 == 2 && r.n & 1 == 1) {
            return Err(Error::KnownFactor(3));
        }
        debug!(h = r.h, "h is not a multiple of 3, so V(1) = 4");
        return Ok(4);
    }

    match method {
        SeedMethod::Riesel => gen_v1_riesel(r.h, r.n),
        SeedMethod::Rodseth => gen_v1_rodseth(r.h, r.n),
        SeedMethod::Penne => gen_v1_penne(r.h, r.n),
    }
}

/// Presence ring for J(P+2, N) evaluations.
///
/// The symbol computed for P + 2 at scan position P comes back four positions
/// later as the P′ − 2 of P′ = P + 4. If the scan is still running by then,
/// that value can only have been +1 (a −1 would have ended the scan), so the
/// ring stores bare presence and a hit answers +1 without recomputation.
/// At most four values are ever outstanding.
#[derive(Default)]
struct RecentPlusTwo {
    slots: [Option<u64>; 4],
    next: usize,
}

impl RecentPlusTwo {
    fn put(&mut self, x: u64) {
        self.slots[self.next] = Some(x);
        self.next = (self.next + 1) % self.slots.len();
    }

    /// Consume a remembered x, evicting it on hit.
    fn take(&mut self, x: u64) -> bool {
        for slot in self.slots.iter_mut() {
            if *slot == Some(x) {
                *slot = None;
                return true;
            }
        }
        false
    }
}

/// The first P with J(P − 2, N) = +1 and J(P + 2, N) = −1.
fn gen_v1_rodseth(h: u64, n: u64) -> Result<u64> {
    let mut cache = JacobiCache::new();
    let mut recent = RecentPlusTwo::default();

    let mut p: u64 = 3;
    while p <= i64::MAX as u64 {
        let j_minus = if recent.take(p - 2) {
            debug!(x = p - 2, "presence hit: symbol was computed as J(P+2, N)");
            1
        } else {
            jacobi::jacobi(p - 2, h, n, Some(&mut cache))?
        };

        if j_minus == 1 {
            let j_plus = jacobi::jacobi(p + 2, h, n, Some(&mut cache))?;
            recent.put(p + 2);
            if j_plus == -1 {
                return Ok(p);
            }
        }

        p += 1;
    }

    Err(Error::SeedOverflow)
}

/// Riesel's original criteria on the square-free part of v² − 4.
fn gen_v1_riesel(h: u64, n: u64) -> Result<u64> {
    let mut cache = JacobiCache::new();

    // v*v stays inside u64 for the whole scan range.
    let mut v: u64 = 3;
    while v < u64::from(u32::MAX) {
        let (_, d) = mathutil::square_free_reduce(v * v - 4);

        // First criterion: J(D, N) = -1.
        if jacobi::jacobi(d, h, n, Some(&mut cache))? == 1 {
            debug!(v, d, "J(D, N) = +1, candidate rejected");
            v += 1;
            continue;
        }

        // alpha = epsilon^2 case: no second criterion needed.
        if mathutil::is_perfect_square(v - 2)? {
            debug!(v, "v - 2 is a perfect square, seed accepted");
            return Ok(v);
        }

        // Second criterion. With a = v - 2 we get a^2 - b^2*D = -4a < 0, so
        // the requirement J(r, N)*sgn(a^2 - b^2*D) = -1 reduces to
        // J(v - 2, N) = +1.
        if jacobi::jacobi(v - 2, h, n, Some(&mut cache))? == 1 {
            return Ok(v);
        }

        v += 1;
    }

    Err(Error::SeedExhausted)
}

/// Penne's scan on the square-free part of x² + 4; here the discriminant
/// test alone certifies the seed x² + 2.
fn gen_v1_penne(h: u64, n: u64) -> Result<u64> {
    let mut cache = JacobiCache::new();

    let mut x: u64 = 1;
    while x < u64::from(u32::MAX) {
        let (_, d) = mathutil::square_free_reduce(x * x + 4);

        if jacobi::jacobi(d, h, n, Some(&mut cache))? == -1 {
            debug!(x, d, "J(D, N) = -1, seed accepted");
            return Ok(x * x + 2);
        }

        x += 1;
    }

    Err(Error::SeedExhausted)
}
