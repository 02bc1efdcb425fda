//! # Rieselhunt — Core Library
//!
//! Deterministic primality testing for Riesel numbers N = h·2^n − 1 using the
//! Lucas–Lehmer–Riesel test: generate a seed V(1), bootstrap U(2) = V(h),
//! iterate U(i+1) = U(i)² − 2 up to U(n), and declare N prime exactly when
//! U(n) ≡ 0 (mod N).
//!
//! ## Module Organization
//!
//! - [`riesel`] — the candidate type and the shift-and-add reduction that
//!   replaces generic division for `a mod (h·2^n − 1)`.
//! - [`jacobi`] — Jacobi symbols J(x, N) specialized to the Riesel form,
//!   evaluated entirely on machine-sized operands.
//! - [`screen`] — accept/reject against the primes below 257 before any
//!   big-integer work.
//! - [`seed`] — the V(1) search: Riesel's, Rödseth's and Penné's scans.
//! - [`lucas`] — the V(h) doubling bootstrap (its two per-step recurrences
//!   run as a parallel pair) and the sequential U(n) squaring loop.
//! - [`llr`] — the orchestrator, [`llr::is_prime`].
//! - [`mathutil`] — machine-integer helpers shared by all of the above.
//! - [`error`] — the engine's error classification; a discovered factor is a
//!   composite verdict, not a fault.
//!
//! ## Design Notes
//!
//! All state lives inside a single [`llr::is_prime`] call: the candidate is
//! immutable and shared by reference, the Jacobi memos are scoped to one seed
//! scan, and nothing module-global is ever mutated. Arbitrary-precision
//! arithmetic is GMP via `rug`; the U(n) loop squares in place and reduces by
//! shifts and adds, so its steady state does no general division.

pub mod error;
pub mod jacobi;
pub mod llr;
pub mod lucas;
pub mod mathutil;
pub mod riesel;
pub mod screen;
pub mod seed;

pub use error::{Error, Result};
pub use llr::is_prime;
pub use riesel::RieselNumber;
pub use seed::SeedMethod;

use rug::Integer;

/// Estimate decimal digit count from bit length, avoiding an expensive
/// to-string conversion on multi-million-bit numbers.
#[inline]
pub fn estimate_digits(n: &Integer) -> u64 {
    let bits = n.significant_bits();
    if bits == 0 {
        return 1;
    }
    (bits as f64 * std::f64::consts::LOG10_2) as u64 + 1
}

/// The last eight decimal digits of n, for logging huge intermediates.
/// Values that already fit eight digits print whole.
pub fn last_digits(n: &Integer) -> String {
    if n.significant_bits() <= 26 {
        // |n| < 10^8
        n.to_string()
    } else {
        format!("..{:08}", n.mod_u(100_000_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_digits_known_values() {
        assert_eq!(estimate_digits(&Integer::from(0u32)), 1);
        assert_eq!(estimate_digits(&Integer::from(9u32)), 1);
        assert_eq!(estimate_digits(&Integer::from(1000u32)), 4);
        // 2^1000 has 302 decimal digits
        let big = Integer::from(1u32) << 1000u32;
        assert_eq!(estimate_digits(&big), 302);
    }

    #[test]
    fn last_digits_small_values_print_whole() {
        assert_eq!(last_digits(&Integer::from(0u32)), "0");
        assert_eq!(last_digits(&Integer::from(91u32)), "91");
        assert_eq!(last_digits(&Integer::from(157_186u32)), "157186");
    }

    #[test]
    fn last_digits_large_values_are_truncated() {
        let n: Integer = "123456789012345".parse().unwrap();
        assert_eq!(last_digits(&n), "..89012345");
    }
}
