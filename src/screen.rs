//! # Screen — Tiny-Prime Pre-Check
//!
//! Answers the cheap cases before the Lucas machinery spins up: candidates
//! that *are* small primes, and candidates divisible by a prime below 257.
//! Divisibility is batched into three gcds against precomputed prime
//! products instead of 53 trial divisions.

use rug::Integer;
use tracing::{debug, warn};

use crate::riesel::RieselNumber;

/// Product of the odd primes 3..=23 (covers the primes below 29).
const PPROD_3_28: u64 = 111_546_435;

/// Product of the primes 29..=43 (covers the primes below 47).
const PPROD_29_46: u64 = 58_642_669;

/// Product of the primes 47..=251 (covers the primes below 257); 281 bits,
/// so it can only share a factor with N when N has at least 282 bits.
const PPROD_47_256: &str =
    "4912291013238638017062389731791584291410159591853190162192019099864799926800582498341";

/// Quick verdict on N against the primes below 257.
///
/// Returns +1 when N is itself a known small prime, −1 when a prime below
/// 257 divides N, and 0 when the screen cannot decide.
pub fn screen_easy_primes(r: &RieselNumber) -> i32 {
    match (r.h, r.n) {
        // Degenerate: 1*2^1 - 1 = 1 is not prime.
        (1, 1) => return -1,
        // With n = 2 and h < 2^n odd, only N = 3 and N = 11 occur.
        (1, 2) | (3, 2) => return 1,
        // The remaining Riesel-form primes below 257:
        // 7, 31, 127; 23, 47, 191; 79; 223; 239.
        (1, 3) | (1, 5) | (1, 7) => return 1,
        (3, 3) | (3, 4) | (3, 6) => return 1,
        (5, 4) | (7, 5) | (15, 4) => return 1,
        _ => {}
    }

    if Integer::from(PPROD_3_28).gcd(&r.value) != 1u32 {
        debug!(candidate = %r, "a prime in 3..29 divides N");
        return -1;
    }
    if Integer::from(PPROD_29_46).gcd(&r.value) != 1u32 {
        debug!(candidate = %r, "a prime in 29..47 divides N");
        return -1;
    }

    // Primes in 47..257 can only divide an N of at least 282 bits.
    if r.value.significant_bits() - 1 >= 281 {
        match PPROD_47_256.parse::<Integer>() {
            Ok(pprod) => {
                if pprod.gcd(&r.value) != 1u32 {
                    debug!(candidate = %r, "a prime in 47..257 divides N");
                    return -1;
                }
            }
            Err(_) => {
                warn!("could not parse the 47..257 prime product; skipping that screen");
            }
        }
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riesel::RieselNumber;

    fn screen(h: u64, n: u64) -> i32 {
        screen_easy_primes(&RieselNumber::new(h, n).unwrap())
    }

    #[test]
    fn degenerate_one_is_not_prime() {
        // n = 1 is below the constructor's floor, so build the struct by hand.
        let r = RieselNumber {
            h: 1,
            n: 1,
            h_big: Integer::from(1),
            value: Integer::from(1),
        };
        assert_eq!(screen_easy_primes(&r), -1);
    }

    #[test]
    fn enumerated_small_primes() {
        let cases: &[(u64, u64)] = &[
            (1, 2),
            (3, 2),
            (1, 3),
            (1, 5),
            (1, 7),
            (3, 3),
            (3, 4),
            (3, 6),
            (5, 4),
            (7, 5),
            (15, 4),
        ];
        for &(h, n) in cases {
            assert_eq!(screen(h, n), 1, "({h}, {n}) is a listed small prime");
        }
    }

    #[test]
    fn small_factors_are_caught() {
        // 1*2^4 - 1 = 15 = 3*5; 1*2^11 - 1 = 2047 = 23*89;
        // 9*2^5 - 1 = 287 = 7*41; 47*2^6 - 1 = 3007 = 31*97
        for &(h, n) in &[(1u64, 4u64), (1, 11), (9, 5), (47, 6)] {
            assert_eq!(screen(h, n), -1, "({h}, {n}) has a factor below 47");
        }
    }

    #[test]
    fn large_prime_screen_gated_on_bit_length() {
        // 2^23 - 1 = 47 * 178481, but N is far below 282 bits, so the
        // 47..257 product is never consulted and the screen stays undecided.
        assert_eq!(screen(1, 23), 0);

        // 83*2^282 - 1 is divisible by 47 and large enough for the third
        // gcd to fire.
        assert_eq!(screen(83, 282), -1);
    }

    #[test]
    fn survivors_stay_undecided() {
        // 479, 1151, 191999 and 8447 are prime but above the screen's range
        for &(h, n) in &[(15u64, 5u64), (9, 7), (375, 9), (33, 8)] {
            assert_eq!(screen(h, n), 0, "({h}, {n}) should pass to the full test");
        }
    }
}
