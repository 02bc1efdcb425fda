//! # Lucas — V(h) Bootstrap and the U(n) Iteration
//!
//! Two stages turn a seed V(1) into the final verdict value U(n):
//!
//! 1. **Bootstrap** (`gen_u2`): U(2) = V(h), computed with the binary
//!    doubling chain V(2x) = V(x)² − 2 and V(2x+1) = V(x+1)·V(x) − V(1),
//!    walking the bits of h from the second-highest down. The pair (r, s)
//!    tracks V(x) and V(x+1); the two recurrences of each step read only
//!    (r, s, V(1), N) and write disjoint outputs, so they run as a
//!    `rayon::join` pair with the join as the per-step barrier.
//! 2. **Iteration** (`gen_un`): U(i+1) = U(i)² − 2 for i = 2..n, strictly
//!    sequential. This loop dominates the runtime for large n; it squares in
//!    place and reduces with the shift-and-add fold, never a full division.
//!
//! ## References
//!
//! - H. Riesel, "Lucasian Criteria for the Primality of N = h·2^n − 1",
//!   Mathematics of Computation, 23(108):869–875, 1969.

use std::cmp::Ordering;
use std::time::Instant;

use rug::Integer;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::last_digits;
use crate::mathutil;
use crate::riesel::{riesel_mod, RieselNumber};

/// U(2) = V(h) mod N from the seed V(1).
///
/// Requires v1 ≥ 3. For h = 1 there is nothing to double: V(1) itself is the
/// answer.
pub fn gen_u2(r: &RieselNumber, v1: u64) -> Result<Integer> {
    r.check()?;
    if v1 < 3 {
        return Err(Error::Precondition(format!(
            "expected v1 >= 3, but received v1 = {v1}"
        )));
    }

    let v1_big = Integer::from(v1);

    // vx tracks V(x), starting at V(1).
    let mut vx = Integer::from(v1);
    if r.h == 1 {
        riesel_mod(&mut vx, r);
        return Ok(vx);
    }

    // vx1 tracks V(x+1), starting at V(2) = V(1)^2 - 2.
    let mut vx1 = Integer::from(&vx * &vx) - 2u32;

    // Walk h from its second-highest bit down to bit 1; bit 0 is handled
    // after the loop since h is odd.
    let bits = mathutil::bit_len(r.h);
    for i in (1..=bits - 2).rev() {
        let (new_vx, new_vx1) = if mathutil::bit(r.h, i) {
            // r <- V(2x+1), s <- V(2x+2)
            rayon::join(
                || {
                    let mut t = Integer::from(&vx1 * &vx) - &v1_big;
                    riesel_mod(&mut t, r);
                    t
                },
                || {
                    let mut t = Integer::from(&vx1 * &vx1) - 2u32;
                    riesel_mod(&mut t, r);
                    t
                },
            )
        } else {
            // s <- V(2x+1), r <- V(2x)
            let (odd, even) = rayon::join(
                || {
                    let mut t = Integer::from(&vx1 * &vx) - &v1_big;
                    riesel_mod(&mut t, r);
                    t
                },
                || {
                    let mut t = Integer::from(&vx * &vx) - 2u32;
                    riesel_mod(&mut t, r);
                    t
                },
            );
            (even, odd)
        };
        vx = new_vx;
        vx1 = new_vx1;

        debug!(bit = i, r = %last_digits(&vx), s = %last_digits(&vx1), "doubling step");
    }

    // h is odd, so the final bit selects r <- V(2x+1).
    vx *= &vx1;
    vx -= &v1_big;
    riesel_mod(&mut vx, r);

    Ok(vx)
}

/// U(n) from U(2): n − 2 squarings, each reduced modulo N.
pub fn gen_un(r: &RieselNumber, u2: Integer) -> Result<Integer> {
    r.check()?;
    if u2.cmp0() == Ordering::Less {
        return Err(Error::Precondition(format!(
            "expected u >= 0, but received u = {u2}"
        )));
    }

    let start = Instant::now();
    let mut u = u2;

    for i in 3..=r.n {
        u.square_mut();
        u -= 2u32;
        riesel_mod(&mut u, r);

        if i % 10_000 == 0 {
            info!(
                iteration = i,
                total = r.n,
                last = %last_digits(&u),
                elapsed_secs = start.elapsed().as_secs(),
                "Lucas iteration progress"
            );
        }
    }

    Ok(u)
}
