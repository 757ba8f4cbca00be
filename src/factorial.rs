use std::fmt;

use num_bigint::BigUint;
use num_traits::One;

use crate::bignum::BigNum;
use crate::error::{Error, Result};

/// Which integer representation computes the factorial. The three variants
/// are the successive iterations of the drill: a native 64-bit accumulator,
/// a library-backed arbitrary-precision integer, and the hand-rolled
/// radix-limited accumulator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Native,
    Bigint,
    Limbs,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Engine::Native => "native",
            Engine::Bigint => "bigint",
            Engine::Limbs => "limbs",
        })
    }
}

/// u64 factorial. Exact up to 20!; larger inputs overflow and are reported
/// as an error rather than wrapping.
pub fn factorial_native(n: u64) -> Result<u64> {
    let mut f: u64 = 1;
    for i in 2..=n {
        f = f.checked_mul(i).ok_or(Error::Overflow { n })?;
    }
    Ok(f)
}

/// Library-backed factorial.
pub fn factorial_bigint(n: u64) -> BigUint {
    let mut f = BigUint::one();
    for i in 2..=n {
        f *= i;
    }
    f
}

/// Factorial on the hand-rolled radix-limited accumulator.
pub fn factorial_limbs(n: u64) -> BigNum {
    let mut f = BigNum::one();
    for i in 2..=n {
        f.mul_small(i);
    }
    f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_of_zero_is_one() {
        assert_eq!(factorial_native(0).unwrap(), 1);
        assert_eq!(factorial_bigint(0), BigUint::one());
        assert_eq!(factorial_limbs(0).to_string(), "1");
    }

    #[test]
    fn factorial_of_one_is_one() {
        assert_eq!(factorial_native(1).unwrap(), 1);
    }

    #[test]
    fn native_small_values() {
        assert_eq!(factorial_native(5).unwrap(), 120);
        assert_eq!(factorial_native(10).unwrap(), 3_628_800);
    }

    #[test]
    fn native_handles_largest_u64_factorial() {
        assert_eq!(factorial_native(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn native_overflows_past_twenty() {
        assert!(matches!(
            factorial_native(21),
            Err(Error::Overflow { n: 21 })
        ));
    }

    #[test]
    fn bigint_and_limbs_agree() {
        for n in [0, 1, 7, 20, 21, 65, 100] {
            assert_eq!(
                factorial_bigint(n).to_string(),
                factorial_limbs(n).to_string(),
                "mismatch at {n}!"
            );
        }
    }

    #[test]
    fn engine_display_names() {
        assert_eq!(Engine::Native.to_string(), "native");
        assert_eq!(Engine::Bigint.to_string(), "bigint");
        assert_eq!(Engine::Limbs.to_string(), "limbs");
    }
}
